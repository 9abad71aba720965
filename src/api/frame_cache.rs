use std::rc::Rc;

use crate::render::RenderFrame;

use super::frame_builder::DerivationInputs;

/// Runtime metrics exposed by the derived-frame cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FrameCacheKey {
    pub(super) revision: u64,
    pub(super) inputs: DerivationInputs,
}

/// Single-entry memo of the last derived frame.
///
/// Holds one entry: derived state is only ever requested for the current
/// registry revision.
#[derive(Debug, Default)]
pub(super) struct FrameCache {
    entry: Option<(FrameCacheKey, Rc<RenderFrame>)>,
    hits: u64,
    misses: u64,
}

impl FrameCache {
    pub(super) fn get(&mut self, key: FrameCacheKey) -> Option<Rc<RenderFrame>> {
        let (cached_key, frame) = self.entry.as_ref()?;
        if *cached_key != key {
            return None;
        }
        self.hits = self.hits.saturating_add(1);
        Some(Rc::clone(frame))
    }

    pub(super) fn insert(&mut self, key: FrameCacheKey, frame: RenderFrame) -> Rc<RenderFrame> {
        self.misses = self.misses.saturating_add(1);
        let frame = Rc::new(frame);
        self.entry = Some((key, Rc::clone(&frame)));
        frame
    }

    pub(super) fn stats(&self) -> FrameCacheStats {
        FrameCacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }
}
