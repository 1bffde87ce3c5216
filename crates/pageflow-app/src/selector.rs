//! Background color selection per section activation
//!
//! Media sections keep their own visual, so the selector is never invoked
//! for them. Explicit per-section overrides are honored verbatim (config
//! can disable that). Everything else gets a uniform random pick from the
//! fixed palette, excluding the immediately-previous color when
//! repetition-avoidance is on.

use rand::Rng;

use pageflow_core::{Rgb, TextContrast, PALETTE};

use crate::state::{AppState, SectionStyle};

/// Resolve and store the background + text contrast for the active section.
pub fn apply_background(state: &mut AppState) {
    let idx = state.nav.current_vertical;
    let (has_media, override_color) = {
        let section = &state.deck.sections[idx];
        (section.has_media(), section.color)
    };

    if has_media {
        // Media provides its own visual; keep light text over it
        state.ui.styles[idx] = SectionStyle {
            background: None,
            contrast: TextContrast::Light,
        };
        return;
    }

    let color = match override_color.filter(|_| state.settings.colors.honor_override) {
        Some(c) => c,
        None => pick(
            &PALETTE,
            state.nav.last_color_used,
            state.settings.colors.avoid_repeat,
            &mut state.rng,
        ),
    };

    state.nav.last_color_used = Some(color);
    state.ui.styles[idx] = SectionStyle {
        background: Some(color),
        contrast: color.contrast(),
    };
}

/// Uniform random pick from the palette, optionally excluding the previous
/// color. Falls back to the full palette if the exclusion empties the
/// candidate set.
pub fn pick(palette: &[Rgb], last: Option<Rgb>, avoid_repeat: bool, rng: &mut impl Rng) -> Rgb {
    debug_assert!(!palette.is_empty());
    if palette.len() == 1 {
        return palette[0];
    }
    if avoid_repeat {
        if let Some(last) = last {
            let candidates: Vec<Rgb> = palette.iter().copied().filter(|c| *c != last).collect();
            if !candidates.is_empty() {
                return candidates[rng.gen_range(0..candidates.len())];
            }
        }
    }
    palette[rng.gen_range(0..palette.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    const A: Rgb = Rgb::new(10, 10, 10);
    const B: Rgb = Rgb::new(20, 20, 20);
    const C: Rgb = Rgb::new(30, 30, 30);

    #[test]
    fn test_single_color_palette() {
        assert_eq!(pick(&[A], Some(A), true, &mut rng()), A);
    }

    #[test]
    fn test_avoidance_excludes_last() {
        // Palette [A, B, C] with last = A: result is in {B, C}, never A
        let mut r = rng();
        for _ in 0..200 {
            let c = pick(&[A, B, C], Some(A), true, &mut r);
            assert_ne!(c, A);
        }
    }

    #[test]
    fn test_no_consecutive_repeats() {
        let mut r = rng();
        let mut last = None;
        for _ in 0..500 {
            let c = pick(&PALETTE, last, true, &mut r);
            assert_ne!(Some(c), last);
            last = Some(c);
        }
    }

    #[test]
    fn test_first_pick_uses_full_palette() {
        let c = pick(&[A, B], None, true, &mut rng());
        assert!(c == A || c == B);
    }
}
