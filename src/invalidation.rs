use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of a widget need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

impl Default for ChangeFlags {
    /// Fresh widgets have never been laid out or painted.
    fn default() -> Self {
        ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fully_dirty() {
        let flags = ChangeFlags::default();
        assert!(flags.contains(ChangeFlags::NEEDS_LAYOUT));
        assert!(flags.contains(ChangeFlags::NEEDS_PAINT));
    }

    #[test]
    fn test_remove_layout_keeps_paint() {
        let mut flags = ChangeFlags::default();
        flags.remove(ChangeFlags::NEEDS_LAYOUT);
        assert!(!flags.contains(ChangeFlags::NEEDS_LAYOUT));
        assert!(flags.contains(ChangeFlags::NEEDS_PAINT));
    }
}
