// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene: mark storage and redraw diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkPayload};

/// A change to the retained mark set, produced by [`Scene::tick`].
///
/// Backends apply diffs in order: insert on `Enter`, replace on `Update`,
/// remove on `Exit`. Exit diffs are how elements for vanished data leave a
/// live document.
#[derive(Clone, Debug)]
pub enum MarkDiff {
    /// A mark id seen for the first time.
    Enter {
        /// The mark's identity.
        id: MarkId,
        /// Rendering order hint.
        z_index: i32,
        /// Geometric bounds, where the payload has well-defined ones.
        bounds: Option<Rect>,
        /// The new payload.
        new: Box<MarkPayload>,
    },
    /// A mark id retained from the previous tick.
    ///
    /// Redraws are wholesale refreshes, so an `Update` is emitted for every
    /// retained id whether or not the payload changed; backends treat it as
    /// a replace.
    Update {
        /// The mark's identity.
        id: MarkId,
        /// Rendering order hint after the update.
        new_z_index: i32,
        /// Geometric bounds of the new payload, where well-defined.
        bounds: Option<Rect>,
        /// The new payload.
        new: Box<MarkPayload>,
    },
    /// A mark id absent from the new mark list.
    Exit {
        /// The mark's identity.
        id: MarkId,
    },
}

/// A retained set of marks, diffed against each redraw.
///
/// The scene owns nothing about rendering: it only remembers which mark ids
/// were alive after the previous [`Scene::tick`] so the next tick can report
/// enters, updates, and exits.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene retains no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Replaces the retained mark set with `marks` and reports the changes.
    ///
    /// Exits come first (sorted by id for determinism), then enters/updates
    /// in the order marks appear in the input. If the input contains the same
    /// id more than once, the last payload wins.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut order: Vec<MarkId> = Vec::with_capacity(marks.len());
        let mut incoming: HashMap<MarkId, (i32, MarkPayload)> =
            HashMap::with_capacity(marks.len());
        for mark in marks {
            if incoming.insert(mark.id, (mark.z_index, mark.payload)).is_none() {
                order.push(mark.id);
            }
        }

        let mut exits: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !incoming.contains_key(id))
            .collect();
        exits.sort_unstable();

        let mut diffs = Vec::with_capacity(exits.len() + order.len());
        for id in exits {
            diffs.push(MarkDiff::Exit { id });
        }

        for id in order {
            let (z_index, payload) = incoming.get(&id).cloned().expect("id from order");
            let bounds = payload.bounds();
            if self.marks.contains_key(&id) {
                diffs.push(MarkDiff::Update {
                    id,
                    new_z_index: z_index,
                    bounds,
                    new: Box::new(payload),
                });
            } else {
                diffs.push(MarkDiff::Enter {
                    id,
                    z_index,
                    bounds,
                    new: Box::new(payload),
                });
            }
        }

        self.marks = incoming;
        diffs
    }

    /// Drops all retained marks and reports an exit for each.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        self.tick(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::Brush;

    use super::*;
    use crate::mark::RectPayload;

    fn rect_mark(id: u64, x0: f64) -> Mark {
        Mark::new(
            MarkId::from_raw(id),
            0,
            MarkPayload::Rect(RectPayload {
                rect: Rect::new(x0, 0.0, x0 + 10.0, 10.0),
                fill: Brush::default(),
            }),
        )
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn missing_ids_exit_before_enters() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);

        let diffs = scene.tick(vec![rect_mark(2, 25.0), rect_mark(3, 40.0)]);
        assert!(matches!(
            diffs[0],
            MarkDiff::Exit {
                id: MarkId(1)
            }
        ));
        assert!(matches!(
            diffs[1],
            MarkDiff::Update {
                id: MarkId(2),
                ..
            }
        ));
        assert!(matches!(
            diffs[2],
            MarkDiff::Enter {
                id: MarkId(3),
                ..
            }
        ));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn retained_ids_update_with_new_bounds() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(7, 0.0)]);
        let diffs = scene.tick(vec![rect_mark(7, 30.0)]);
        let MarkDiff::Update { bounds, .. } = &diffs[0] else {
            panic!("expected Update, got {:?}", diffs[0]);
        };
        assert_eq!(*bounds, Some(Rect::new(30.0, 0.0, 40.0, 10.0)));
    }

    #[test]
    fn duplicate_ids_last_payload_wins() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(5, 0.0), rect_mark(5, 50.0)]);
        assert_eq!(diffs.len(), 1);
        let MarkDiff::Enter { bounds, .. } = &diffs[0] else {
            panic!("expected Enter, got {:?}", diffs[0]);
        };
        assert_eq!(*bounds, Some(Rect::new(50.0, 0.0, 60.0, 10.0)));
    }

    #[test]
    fn clear_exits_everything() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        let diffs = scene.clear();
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
        assert!(scene.is_empty());
    }
}
