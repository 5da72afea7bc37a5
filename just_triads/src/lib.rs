//! # just_triads
//!
//! Just-intonation triads for the seven degrees of a major scale, and
//! octave expansion of a chord into a playable voicing.
//!
//! Every ratio is a small whole-number fraction of the root, so the notes
//! of a triad are exact harmonics of each other instead of equal-tempered
//! approximations.
//!
//! ## Quick start
//!
//! ```rust
//! use just_triads::{major_triad, expand_chord, ScaleDegree};
//!
//! let a = major_triad(220.0);
//! assert_eq!(a, [220.0, 275.0, 330.0]);
//!
//! // Root, third and fifth across two octaves.
//! let voicing = expand_chord(&a, 2);
//! assert_eq!(voicing, vec![220.0, 275.0, 330.0, 440.0, 550.0, 660.0]);
//!
//! // The dominant triad of A.
//! let v = ScaleDegree::V.triad(220.0);
//! assert_eq!(v[0], 330.0);
//! ```

use log::debug;

// ════════════════════════════════════════════════════════════════════════════
// Interval ratios
// ════════════════════════════════════════════════════════════════════════════

/// Just-intonation interval ratios relative to a root (unison = 1).
pub mod ratios {
    pub const UNISON:          f64 = 1.0;
    pub const MAJOR_SECOND:    f64 = 9.0 / 8.0;
    pub const MINOR_THIRD:     f64 = 6.0 / 5.0;
    pub const MAJOR_THIRD:     f64 = 5.0 / 4.0;
    pub const PERFECT_FOURTH:  f64 = 4.0 / 3.0;
    pub const DIMINISHED_FIFTH: f64 = 64.0 / 45.0;
    pub const PERFECT_FIFTH:   f64 = 3.0 / 2.0;
    pub const MAJOR_SIXTH:     f64 = 5.0 / 3.0;
    pub const MAJOR_SEVENTH:   f64 = 15.0 / 8.0;
    pub const OCTAVE:          f64 = 2.0;
}

use ratios::*;

/// Frequency of C0 in Hz, the default chord root.
pub const C0: f64 = 32.7032;

/// Default number of octaves a chord is spread over.
pub const DEFAULT_TOTAL_OCTAVES: usize = 5;

/// Root, third, fifth in Hz.
pub type Triad = [f64; 3];

// ════════════════════════════════════════════════════════════════════════════
// Triads
// ════════════════════════════════════════════════════════════════════════════

pub fn major_triad(root: f64) -> Triad {
    [root, root * MAJOR_THIRD, root * PERFECT_FIFTH]
}

pub fn minor_triad(root: f64) -> Triad {
    [root, root * MINOR_THIRD, root * PERFECT_FIFTH]
}

pub fn diminished_triad(root: f64) -> Triad {
    [root, root * MINOR_THIRD, root * DIMINISHED_FIFTH]
}

/// Quality of a triad built on a scale degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
}

impl TriadQuality {
    pub fn triad(self, root: f64) -> Triad {
        match self {
            TriadQuality::Major      => major_triad(root),
            TriadQuality::Minor      => minor_triad(root),
            TriadQuality::Diminished => diminished_triad(root),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TriadQuality::Major      => "major",
            TriadQuality::Minor      => "minor",
            TriadQuality::Diminished => "diminished",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ScaleDegree
// ════════════════════════════════════════════════════════════════════════════

/// A degree of the major scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleDegree {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl ScaleDegree {
    pub const ALL: [ScaleDegree; 7] = [
        ScaleDegree::I,
        ScaleDegree::II,
        ScaleDegree::III,
        ScaleDegree::IV,
        ScaleDegree::V,
        ScaleDegree::VI,
        ScaleDegree::VII,
    ];

    /// Ratio of this degree to the tonic.
    pub fn ratio(self) -> f64 {
        match self {
            ScaleDegree::I   => UNISON,
            ScaleDegree::II  => MAJOR_SECOND,
            ScaleDegree::III => MAJOR_THIRD,
            ScaleDegree::IV  => PERFECT_FOURTH,
            ScaleDegree::V   => PERFECT_FIFTH,
            ScaleDegree::VI  => MAJOR_SIXTH,
            ScaleDegree::VII => MAJOR_SEVENTH,
        }
    }

    /// I IV V major, ii iii vi minor, vii° diminished.
    pub fn quality(self) -> TriadQuality {
        match self {
            ScaleDegree::I | ScaleDegree::IV | ScaleDegree::V     => TriadQuality::Major,
            ScaleDegree::II | ScaleDegree::III | ScaleDegree::VI  => TriadQuality::Minor,
            ScaleDegree::VII                                      => TriadQuality::Diminished,
        }
    }

    /// Roman numeral, lower case for minor and `°` for diminished.
    pub fn numeral(self) -> &'static str {
        match self {
            ScaleDegree::I   => "I",
            ScaleDegree::II  => "ii",
            ScaleDegree::III => "iii",
            ScaleDegree::IV  => "IV",
            ScaleDegree::V   => "V",
            ScaleDegree::VI  => "vi",
            ScaleDegree::VII => "vii°",
        }
    }

    /// Triad on this degree of the scale whose tonic is `tonic`.
    pub fn triad(self, tonic: f64) -> Triad {
        self.quality().triad(tonic * self.ratio())
    }
}

/// The seven diatonic triads of the major scale on `tonic`, I to vii°.
pub fn scale_triads(tonic: f64) -> [Triad; 7] {
    ScaleDegree::ALL.map(|d| d.triad(tonic))
}

// ════════════════════════════════════════════════════════════════════════════
// Octave expansion
// ════════════════════════════════════════════════════════════════════════════

/// Repeat `chord` an octave higher, `total_octaves − 1` times.
///
/// Each appended note is double the note `chord.len()` positions before
/// it, so the base chord comes first followed by each higher copy in the
/// original order.  `total_octaves` of 0 or 1 returns the chord as is.
pub fn expand_chord(chord: &[f64], total_octaves: usize) -> Vec<f64> {
    let extra = chord.len() * total_octaves.saturating_sub(1);
    let mut out = Vec::with_capacity(chord.len() + extra);
    out.extend_from_slice(chord);
    for i in 0..extra {
        out.push(out[i] * OCTAVE);
    }
    out
}

// ════════════════════════════════════════════════════════════════════════════
// ChordConfig
// ════════════════════════════════════════════════════════════════════════════

/// Tonic and octave span used to voice the diatonic chords.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChordConfig {
    /// Tonic frequency in Hz (default: [`C0`])
    pub root_hz: f64,
    /// Octaves each chord is spread over (default: 5)
    pub total_octaves: usize,
}

impl Default for ChordConfig {
    fn default() -> Self {
        ChordConfig {
            root_hz:       C0,
            total_octaves: DEFAULT_TOTAL_OCTAVES,
        }
    }
}

impl ChordConfig {
    pub fn new(root_hz: f64, total_octaves: usize) -> Self {
        ChordConfig { root_hz, total_octaves }
    }

    /// Expanded voicing of one degree's triad.
    pub fn chord(&self, degree: ScaleDegree) -> Vec<f64> {
        expand_chord(&degree.triad(self.root_hz), self.total_octaves)
    }

    /// Expanded voicings of all seven degrees, I to vii°.
    pub fn scale_chords(&self) -> Vec<Vec<f64>> {
        debug!(
            "voicing scale on {:.4} Hz over {} octave(s)",
            self.root_hz, self.total_octaves
        );
        ScaleDegree::ALL.iter().map(|&d| self.chord(d)).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Equal-temperament mapping
// ════════════════════════════════════════════════════════════════════════════

/// MIDI note number of A4.
pub const A4_MIDI: f64 = 69.0;
/// Frequency of A4 in Hz.
pub const A4_HZ: f64 = 440.0;

/// Fractional MIDI note number of `hz` on a 12-TET, A4 = 440 Hz keyboard.
pub fn frequency_to_midi(hz: f64) -> f64 {
    A4_MIDI + 12.0 * (hz / A4_HZ).log2()
}

/// Closest MIDI note (0–127), or `None` if `hz` is off the keyboard.
pub fn nearest_midi_note(hz: f64) -> Option<u8> {
    if !(hz > 0.0 && hz.is_finite()) {
        return None;
    }
    let n = frequency_to_midi(hz).round();
    if (0.0..=127.0).contains(&n) { Some(n as u8) } else { None }
}

/// Deviation of `hz` from its nearest equal-tempered note, in cents
/// (−50..50).
pub fn cents_offset(hz: f64) -> f64 {
    let m = frequency_to_midi(hz);
    100.0 * (m - m.round())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < EPS }

    fn all_close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| close(*x, *y))
    }

    // ── triads ────────────────────────────────────────────────────────────
    #[test]
    fn major_triad_of_a3() {
        assert_eq!(major_triad(220.0), [220.0, 275.0, 330.0]);
    }

    #[test]
    fn minor_and_diminished_share_the_third() {
        let m = minor_triad(100.0);
        let d = diminished_triad(100.0);
        assert!(all_close(&m, &[100.0, 120.0, 150.0]));
        assert!(all_close(&d, &[100.0, 120.0, 6400.0 / 45.0]));
    }

    #[test]
    fn quality_dispatch() {
        assert_eq!(TriadQuality::Major.triad(80.0), major_triad(80.0));
        assert_eq!(TriadQuality::Minor.triad(80.0), minor_triad(80.0));
        assert_eq!(TriadQuality::Diminished.triad(80.0), diminished_triad(80.0));
    }

    // ── scale degrees ─────────────────────────────────────────────────────
    #[test]
    fn scale_triad_roots() {
        let roots: Vec<f64> = scale_triads(100.0).iter().map(|t| t[0]).collect();
        let expected = [100.0, 112.5, 125.0, 400.0 / 3.0, 150.0, 500.0 / 3.0, 187.5];
        assert!(all_close(&roots, &expected), "{:?}", roots);
    }

    #[test]
    fn scale_triad_qualities() {
        let t = scale_triads(100.0);
        assert_eq!(t[0], major_triad(100.0));
        assert!(all_close(&t[1], &minor_triad(112.5)));
        assert!(all_close(&t[2], &minor_triad(125.0)));
        assert!(all_close(&t[3], &major_triad(400.0 / 3.0)));
        assert!(all_close(&t[4], &major_triad(150.0)));
        assert!(all_close(&t[5], &minor_triad(500.0 / 3.0)));
        assert!(all_close(&t[6], &diminished_triad(187.5)));
    }

    #[test]
    fn numerals_follow_quality() {
        let names: Vec<&str> = ScaleDegree::ALL.iter().map(|d| d.numeral()).collect();
        assert_eq!(names, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
        assert_eq!(ScaleDegree::VII.quality(), TriadQuality::Diminished);
    }

    // ── expand_chord ──────────────────────────────────────────────────────
    #[test]
    fn expand_one_octave_is_identity() {
        assert_eq!(expand_chord(&[100.0, 125.0, 150.0], 1), vec![100.0, 125.0, 150.0]);
    }

    #[test]
    fn expand_two_octaves() {
        assert_eq!(
            expand_chord(&[100.0, 125.0, 150.0], 2),
            vec![100.0, 125.0, 150.0, 200.0, 250.0, 300.0]
        );
    }

    #[test]
    fn expand_five_octaves() {
        let c = expand_chord(&[100.0, 125.0, 150.0], 5);
        assert_eq!(c.len(), 15);
        assert_eq!(&c[12..], &[1600.0, 2000.0, 2400.0]);
    }

    #[test]
    fn expand_degenerate_inputs() {
        assert_eq!(expand_chord(&[100.0, 150.0], 0), vec![100.0, 150.0]);
        assert!(expand_chord(&[], 4).is_empty());
        assert_eq!(expand_chord(&[55.0], 3), vec![55.0, 110.0, 220.0]);
    }

    // ── ChordConfig ───────────────────────────────────────────────────────
    #[test]
    fn default_config_voices_c0_over_five_octaves() {
        let cfg = ChordConfig::default();
        assert_eq!(cfg.root_hz, C0);
        let chords = cfg.scale_chords();
        assert_eq!(chords.len(), 7);
        assert!(chords.iter().all(|c| c.len() == 15));
        assert!(close(chords[0][3], 2.0 * C0));
    }

    #[test]
    fn config_chord_matches_expand() {
        let cfg = ChordConfig::new(220.0, 2);
        assert_eq!(cfg.chord(ScaleDegree::I), expand_chord(&major_triad(220.0), 2));
    }

    // ── equal temperament ─────────────────────────────────────────────────
    #[test]
    fn a4_is_note_69() {
        assert!(close(frequency_to_midi(440.0), 69.0));
        assert_eq!(nearest_midi_note(440.0), Some(69));
        assert!(cents_offset(440.0).abs() < 1e-9);
    }

    #[test]
    fn c0_constant_is_midi_24() {
        assert_eq!(nearest_midi_note(C0), Some(24));
        assert!(cents_offset(C0).abs() < 0.01);
    }

    #[test]
    fn just_major_third_is_flat() {
        // 5/4 is about 13.7 cents below the tempered major third.
        let third = major_triad(440.0)[1];
        assert_eq!(nearest_midi_note(third), Some(73));
        assert!((cents_offset(third) + 13.686).abs() < 0.01);
    }

    #[test]
    fn off_keyboard_frequencies() {
        assert_eq!(nearest_midi_note(0.0), None);
        assert_eq!(nearest_midi_note(-10.0), None);
        assert_eq!(nearest_midi_note(f64::NAN), None);
        assert_eq!(nearest_midi_note(1.0), None);
        assert_eq!(nearest_midi_note(50_000.0), None);
    }
}
