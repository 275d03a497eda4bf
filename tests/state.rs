mod tests {
    use macropad_rgb::{
        BRIGHTNESS_DEFAULT, BRIGHTNESS_STEP, ColorSetting, FIRST_TOGGLEABLE_LED, LED_COUNT,
        RgbState,
    };

    // Defaults: color setting 3 in bits 15..=16, brightness 128 in
    // bits 17..=24, all flag bits clear.
    const DEFAULT_RAW: u32 = (3 << 15) | (128 << 17);

    #[test]
    fn test_default_word_layout() {
        let state = RgbState::default();
        assert_eq!(state.raw(), DEFAULT_RAW);
        assert_eq!(state.color_setting(), ColorSetting::Default);
        assert_eq!(state.brightness(), BRIGHTNESS_DEFAULT);
        for index in 0..LED_COUNT {
            assert!(!state.flag(index));
        }
    }

    #[test]
    fn test_raw_round_trip() {
        let raw = 0xDEAD_BEEF;
        assert_eq!(RgbState::from_raw(raw).raw(), raw);
    }

    #[test]
    fn test_toggle_sets_matching_bit() {
        let mut state = RgbState::from_raw(0);
        state.toggle_flag(3);
        assert_eq!(state.raw(), 1 << 3);
        state.toggle_flag(14);
        assert_eq!(state.raw(), (1 << 3) | (1 << 14));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut state = RgbState::default();
        for index in FIRST_TOGGLEABLE_LED..LED_COUNT {
            state.toggle_flag(index);
            assert!(state.flag(index));
            state.toggle_flag(index);
            assert!(!state.flag(index));
            assert_eq!(state, RgbState::default());
        }
    }

    #[test]
    fn test_toggle_ignores_reserved_and_out_of_range() {
        let mut state = RgbState::default();
        state.toggle_flag(0);
        state.toggle_flag(1);
        state.toggle_flag(2);
        state.toggle_flag(LED_COUNT);
        state.toggle_flag(200);
        assert_eq!(state.raw(), DEFAULT_RAW);
    }

    #[test]
    fn test_reserved_flags_unobservable() {
        // Even with the low bits forced set in the raw word, the first
        // three indices never report a flag.
        let state = RgbState::from_raw(DEFAULT_RAW | 0b111);
        assert!(!state.flag(0));
        assert!(!state.flag(1));
        assert!(!state.flag(2));
        assert!(!state.flag(LED_COUNT));
    }

    #[test]
    fn test_color_setting_round_trip() {
        let mut state = RgbState::default();
        for setting in [
            ColorSetting::Me,
            ColorSetting::Love,
            ColorSetting::Her,
            ColorSetting::Default,
        ] {
            state.set_color_setting(setting);
            assert_eq!(state.color_setting(), setting);
            // Only the 2-bit field moves.
            assert_eq!(state.brightness(), BRIGHTNESS_DEFAULT);
            assert!(!state.flag(5));
        }
    }

    #[test]
    fn test_brightness_steps_by_sixteen() {
        let mut state = RgbState::default();
        state.increase_brightness();
        assert_eq!(state.brightness(), BRIGHTNESS_DEFAULT + BRIGHTNESS_STEP);
        state.decrease_brightness();
        assert_eq!(state.brightness(), BRIGHTNESS_DEFAULT);
    }

    #[test]
    fn test_brightness_clamps_at_bounds() {
        let mut state = RgbState::from_raw(0);
        assert_eq!(state.brightness(), 0);
        state.decrease_brightness();
        assert_eq!(state.brightness(), 0);

        // 128 + 8 * 16 overshoots; the last step saturates at 255.
        let mut state = RgbState::default();
        for _ in 0..8 {
            state.increase_brightness();
        }
        assert_eq!(state.brightness(), 255);
        state.increase_brightness();
        assert_eq!(state.brightness(), 255);
    }

    #[test]
    fn test_brightness_does_not_disturb_other_fields() {
        let mut state = RgbState::default();
        state.toggle_flag(7);
        state.set_color_setting(ColorSetting::Love);
        state.increase_brightness();
        assert!(state.flag(7));
        assert_eq!(state.color_setting(), ColorSetting::Love);
    }
}
