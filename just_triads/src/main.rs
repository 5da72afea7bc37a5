//! Interactive explorer for just-intonation diatonic triads.
//!
//! `--quick` prints the table for the default C0 tonic and exits.

use just_triads::{nearest_midi_note, cents_offset, ChordConfig, ScaleDegree, C0};
use std::io::{self, Write};

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║          Just-Intonation Triad Explorer              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    if std::env::args().any(|a| a == "--quick") {
        print_table(&ChordConfig::default());
        return;
    }

    loop {
        let choice = read_line(&format!("Tonic in Hz (default {}, q to quit): ", C0));
        if choice.trim().eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }
        let root_hz = match choice.trim() {
            ""  => C0,
            s   => match s.parse::<f64>() {
                Ok(hz) if hz > 0.0 && hz.is_finite() => hz,
                _ => { println!("  ⚠  Please enter a positive frequency.\n"); continue; }
            },
        };

        let total_octaves: usize = read_line("  Octaves 1–9 (default 5): ")
            .trim().parse().unwrap_or(5);
        let total_octaves = total_octaves.max(1).min(9);

        print_table(&ChordConfig::new(root_hz, total_octaves));
    }
}

fn print_table(cfg: &ChordConfig) {
    println!("  ┌─ tonic {:.4} Hz, {} octave(s) ─", cfg.root_hz, cfg.total_octaves);
    for (degree, chord) in ScaleDegree::ALL.iter().zip(cfg.scale_chords()) {
        let triad = degree.triad(cfg.root_hz);
        let notes: Vec<String> = triad.iter().map(|&hz| describe(hz)).collect();
        println!("  │  {:<5} {:<10} {}", degree.numeral(), degree.quality().name(), notes.join("  "));
        let top = chord.last().copied().unwrap_or(triad[2]);
        println!("  │        {} notes, up to {:.2} Hz", chord.len(), top);
    }
    println!("  └─");
    println!();
}

fn describe(hz: f64) -> String {
    match nearest_midi_note(hz) {
        Some(n) => format!("{:>9.3} Hz (MIDI {:>3} {:+6.1}¢)", hz, n, cents_offset(hz)),
        None    => format!("{:>9.3} Hz (off keyboard)", hz),
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
