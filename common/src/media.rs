//! View-state machine for the product media gallery.

/// Interval between feature-highlight rotations, in milliseconds.
pub const FEATURE_ROTATE_MS: u32 = 3_000;

/// Which pane the media card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaMode {
    Photos,
    Video { playing: bool, muted: bool },
}

/// Gallery state: a selected thumbnail plus the photo/video toggle.
///
/// Leaving video mode discards the play/mute flags, so re-entering it
/// always starts paused and muted; audio can never keep running behind
/// the photo pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaState {
    pub selected_image: usize,
    pub mode: MediaMode,
}

impl Default for MediaState {
    fn default() -> Self {
        Self::initial()
    }
}

impl MediaState {
    pub fn initial() -> Self {
        MediaState {
            selected_image: 0,
            mode: MediaMode::Photos,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self.mode, MediaMode::Video { .. })
    }

    /// Switch to the video pane, paused and muted. The caller only
    /// offers this transition when the product has a video URI.
    pub fn show_video(&mut self) {
        self.mode = MediaMode::Video {
            playing: false,
            muted: true,
        };
    }

    /// Switch back to the photo pane. The selected thumbnail survives
    /// the round trip; the video flags do not.
    pub fn show_photos(&mut self) {
        self.mode = MediaMode::Photos;
    }

    /// Select a thumbnail. Ignored while the video pane is showing.
    pub fn select_image(&mut self, index: usize) {
        if self.mode == MediaMode::Photos {
            self.selected_image = index;
        }
    }

    pub fn toggle_play(&mut self) {
        if let MediaMode::Video { playing, muted } = self.mode {
            self.mode = MediaMode::Video {
                playing: !playing,
                muted,
            };
        }
    }

    pub fn toggle_mute(&mut self) {
        if let MediaMode::Video { playing, muted } = self.mode {
            self.mode = MediaMode::Video {
                playing,
                muted: !muted,
            };
        }
    }
}

/// Zero-based rotation over a product's feature list, advancing on a
/// fixed interval and wrapping modulo the list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureCarousel {
    index: usize,
    len: usize,
}

impl FeatureCarousel {
    pub fn new(len: usize) -> Self {
        FeatureCarousel { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_photo() {
        let state = MediaState::initial();
        assert_eq!(state.selected_image, 0);
        assert_eq!(state.mode, MediaMode::Photos);
    }

    #[test]
    fn video_enters_paused_and_muted() {
        let mut state = MediaState::initial();
        state.show_video();
        assert_eq!(
            state.mode,
            MediaMode::Video {
                playing: false,
                muted: true
            }
        );
    }

    #[test]
    fn leaving_video_resets_flags() {
        let mut state = MediaState::initial();
        state.show_video();
        state.toggle_play();
        state.toggle_mute();
        assert_eq!(
            state.mode,
            MediaMode::Video {
                playing: true,
                muted: false
            }
        );

        state.show_photos();
        state.show_video();
        assert_eq!(
            state.mode,
            MediaMode::Video {
                playing: false,
                muted: true
            }
        );
    }

    #[test]
    fn thumbnail_selection_survives_video_round_trip() {
        let mut state = MediaState::initial();
        state.select_image(2);
        state.show_video();
        // Selection is frozen while the video pane shows.
        state.select_image(4);
        state.show_photos();
        assert_eq!(state.selected_image, 2);
    }

    #[test]
    fn play_and_mute_toggle_independently() {
        let mut state = MediaState::initial();
        state.show_video();
        state.toggle_play();
        assert_eq!(
            state.mode,
            MediaMode::Video {
                playing: true,
                muted: true
            }
        );
        state.toggle_mute();
        assert_eq!(
            state.mode,
            MediaMode::Video {
                playing: true,
                muted: false
            }
        );
        state.toggle_play();
        assert_eq!(
            state.mode,
            MediaMode::Video {
                playing: false,
                muted: false
            }
        );
    }

    #[test]
    fn toggles_are_inert_in_photo_mode() {
        let mut state = MediaState::initial();
        state.toggle_play();
        state.toggle_mute();
        assert_eq!(state.mode, MediaMode::Photos);
    }

    #[test]
    fn carousel_wraps_modulo_len() {
        let mut c = FeatureCarousel::new(3);
        assert_eq!(c.current(), 0);
        assert_eq!(c.advance(), 1);
        assert_eq!(c.advance(), 2);
        assert_eq!(c.advance(), 0);
        assert_eq!(c.advance(), 1);
    }

    #[test]
    fn empty_carousel_never_advances() {
        let mut c = FeatureCarousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.advance(), 0);
        assert_eq!(c.current(), 0);
    }
}
