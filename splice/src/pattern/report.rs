//! Canonical text report rendering for decoded patterns.
//!
//! The report format is a compatibility contract: consumers diff this output
//! byte-for-byte, so the tab separator, the 21-column minimum width of the
//! steps row and the trailing newline are all fixed.

use std::fmt;

use crate::pattern::{Pattern, Track, STEP_COUNT};

/// Minimum width of the steps-row field in a track line.
const STEPS_FIELD_WIDTH: usize = 21;

/// Render a tempo with no decimal point for whole values, one decimal digit
/// otherwise: `120.0` becomes `"120"`, `98.5` becomes `"98.5"`.
fn format_tempo(tempo: f32) -> String {
    if tempo.fract() == 0.0 {
        format!("{tempo:.0}")
    } else {
        format!("{tempo:.1}")
    }
}

/// Render the 16 cells as `x`/`-` with a `|` before the row and after every
/// fourth cell, e.g. `|x---|x---|x---|x---|`.
fn steps_row(steps: &[u8; STEP_COUNT]) -> String {
    let mut row = String::with_capacity(STEPS_FIELD_WIDTH);
    row.push('|');

    for (index, cell) in steps.iter().enumerate() {
        row.push(if *cell != 0 { 'x' } else { '-' });
        if (index + 1) % 4 == 0 {
            row.push('|');
        }
    }

    row
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}\t{:>width$}",
            self.id,
            self.name,
            steps_row(&self.steps),
            width = STEPS_FIELD_WIDTH
        )
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        write!(f, "Tempo: {}", format_tempo(self.tempo))?;

        for track in &self.tracks {
            write!(f, "\n{track}")?;
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tempo_rendering() {
        assert_eq!(format_tempo(120.0), "120");
        assert_eq!(format_tempo(98.5), "98.5");
        assert_eq!(format_tempo(0.0), "0");
        assert_eq!(format_tempo(999.0), "999");
    }

    #[test]
    fn steps_row_groups_of_four() {
        let steps = [1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0];
        assert_eq!(steps_row(&steps), "|xx--|----|x---|--x-|");

        assert_eq!(steps_row(&[0; STEP_COUNT]), "|----|----|----|----|");
        assert_eq!(steps_row(&[1; STEP_COUNT]), "|xxxx|xxxx|xxxx|xxxx|");
    }

    #[test]
    fn track_line_has_tab_and_min_width_field() {
        let track = Track {
            id: 0,
            name: "kick".to_string(),
            steps: [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
        };

        assert_eq!(track.to_string(), "(0) kick\t|x---|x---|x---|x---|");
    }

    #[test]
    fn report_ends_with_trailing_newline() {
        let pattern = Pattern {
            version: "0.808-alpha".to_string(),
            tempo: 98.5,
            tracks: vec![Track {
                id: 1,
                name: "snare".to_string(),
                steps: [0; STEP_COUNT],
            }],
        };

        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha\nTempo: 98.5\n(1) snare\t|----|----|----|----|\n"
        );
    }

    #[test]
    fn report_without_tracks() {
        let pattern = Pattern {
            version: "0.909".to_string(),
            tempo: 240.0,
            tracks: Vec::new(),
        };

        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.909\nTempo: 240\n"
        );
    }
}
