//! Pointer and touch contacts shared between input handlers and the driver.
//!
//! Handlers never edit the list in place: every event builds a fresh
//! [`Contacts`] value and swaps it in whole, and the driver clones a snapshot
//! at the start of each step. A step therefore always sees one complete set.

use crate::constants::DEFAULT_CONTACT_FORCE;
use crate::geometry::Surface;
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// A pointer or touch influence in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub position: Vec2,
    pub force: f32,
}

impl Contact {
    /// A contact with the given pressure; unusable pressures become 1.
    pub fn new(position: Vec2, force: f32) -> Self {
        let force = if force.is_finite() && force > 0.0 {
            force
        } else {
            DEFAULT_CONTACT_FORCE
        };
        Self { position, force }
    }
}

pub type Contacts = SmallVec<[Contact; 4]>;

/// Touch point as reported by the host, already in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawTouch {
    pub position: Vec2,
    pub force: Option<f32>,
}

/// Input the front end forwards to a button.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove(Vec2),
    PointerLeave,
    Touches(Vec<RawTouch>),
    TouchEnd,
}

/// Handle to the contact list of one button.
#[derive(Clone, Debug, Default)]
pub struct SharedContacts {
    inner: Rc<RefCell<Contacts>>,
}

impl SharedContacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, contacts: Contacts) {
        *self.inner.borrow_mut() = contacts;
    }

    pub fn clear(&self) {
        self.replace(Contacts::new());
    }

    pub fn snapshot(&self) -> Contacts {
        self.inner.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Translate one input event into a whole-list replacement.
    ///
    /// Touches outside `surface` are dropped, so a document-wide touch stream
    /// can be fed to every button and each keeps only its own contacts.
    pub fn apply(&self, event: InputEvent, surface: Surface) {
        let next = match event {
            InputEvent::PointerMove(position) => {
                let mut c = Contacts::new();
                c.push(Contact::new(position, DEFAULT_CONTACT_FORCE));
                c
            }
            InputEvent::Touches(touches) => touches
                .into_iter()
                .filter(|t| surface.contains(t.position))
                .map(|t| Contact::new(t.position, t.force.unwrap_or(DEFAULT_CONTACT_FORCE)))
                .collect(),
            InputEvent::PointerLeave | InputEvent::TouchEnd => Contacts::new(),
        };
        self.replace(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Surface = Surface {
        width: 280.0,
        height: 130.0,
    };

    #[test]
    fn pointer_move_yields_single_unit_contact() {
        let shared = SharedContacts::new();
        shared.apply(InputEvent::PointerMove(Vec2::new(10.0, 20.0)), SURFACE);
        shared.apply(InputEvent::PointerMove(Vec2::new(30.0, 40.0)), SURFACE);
        let snap = shared.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].position, Vec2::new(30.0, 40.0));
        assert_eq!(snap[0].force, 1.0);
    }

    #[test]
    fn touches_are_filtered_to_surface() {
        let shared = SharedContacts::new();
        shared.apply(
            InputEvent::Touches(vec![
                RawTouch {
                    position: Vec2::new(5.0, 5.0),
                    force: Some(0.5),
                },
                RawTouch {
                    position: Vec2::new(280.0, 5.0),
                    force: None,
                },
                RawTouch {
                    position: Vec2::new(-1.0, 5.0),
                    force: None,
                },
                RawTouch {
                    position: Vec2::new(100.0, 100.0),
                    force: Some(0.0),
                },
            ]),
            SURFACE,
        );
        let snap = shared.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].force, 0.5);
        assert_eq!(snap[1].force, 1.0);
    }

    #[test]
    fn leave_and_touch_end_clear() {
        let shared = SharedContacts::new();
        shared.apply(InputEvent::PointerMove(Vec2::ONE), SURFACE);
        shared.apply(InputEvent::PointerLeave, SURFACE);
        assert!(shared.is_empty());
        shared.apply(InputEvent::PointerMove(Vec2::ONE), SURFACE);
        shared.apply(InputEvent::TouchEnd, SURFACE);
        assert!(shared.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_replacements() {
        let shared = SharedContacts::new();
        shared.apply(InputEvent::PointerMove(Vec2::ONE), SURFACE);
        let snap = shared.snapshot();
        shared.clear();
        assert_eq!(snap.len(), 1);
        assert!(shared.is_empty());
    }

    #[test]
    fn non_finite_force_falls_back_to_one() {
        assert_eq!(Contact::new(Vec2::ZERO, f32::NAN).force, 1.0);
        assert_eq!(Contact::new(Vec2::ZERO, -2.0).force, 1.0);
    }
}
