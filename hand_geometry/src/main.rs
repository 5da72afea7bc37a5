//! hand_probe: print the features of every hand in a tracker frame.
//!
//! ```text
//! hand_probe frame.json [--thumb-threshold 0.6] [--finger-threshold 1.0] [--json]
//! ```

use hand_geometry::{select_hand, FeatureConfig, Finger, HandFeatures, HandLandmarkerResult, Handedness};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, config, as_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("usage: hand_probe <frame.json> [--thumb-threshold X] [--finger-threshold Y] [--json]");
            std::process::exit(2);
        }
    };

    let frame = match HandLandmarkerResult::from_path(&path) {
        Ok(f)  => f,
        Err(e) => {
            eprintln!("Error: {}: {}", path, e);
            std::process::exit(1);
        }
    };

    // Features come from world landmarks; image landmarks are for overlays.
    let hands: Vec<(Handedness, HandFeatures)> = [Handedness::Left, Handedness::Right]
        .into_iter()
        .filter_map(|h| select_hand(h, &frame).map(|(world, _)| (h, HandFeatures::extract(&world, &config))))
        .collect();

    if as_json {
        let out: serde_json::Map<String, serde_json::Value> = hands.iter()
            .filter_map(|(h, f)| serde_json::to_value(f).ok().map(|v| (h.label().to_lowercase(), v)))
            .collect();
        println!("{}", serde_json::Value::Object(out));
        return;
    }

    println!();
    println!("  {}: {} hand(s) detected", path, frame.len());
    if hands.is_empty() {
        println!("  (no hands)");
    }
    for (hand, f) in &hands {
        println!();
        println!("  ┌─ {} hand ─", hand);
        for (i, finger) in Finger::ALL.iter().enumerate() {
            println!("  │  {:<7} {:>6.3}  {}",
                     finger.name(), f.extensions[i], if f.extended[i] { "extended" } else { "bent" });
        }
        println!("  │  extended : {}", f.extended_count);
        println!("  │  spread   : {:.4}", f.spread);
        println!("  │  centre   : ({:.4}, {:.4}, {:.4})", f.center.x, f.center.y, f.center.z);
        println!("  │  upright  : {}", f.upright);
        println!("  └─");
    }
    println!();
}

fn parse_args(args: &[String]) -> Result<(String, FeatureConfig, bool), String> {
    let mut path    = None;
    let mut config  = FeatureConfig::default();
    let mut as_json = false;

    let mut it = args.iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--thumb-threshold"  => config.thumb_threshold  = threshold(a, it.next())?,
            "--finger-threshold" => config.finger_threshold = threshold(a, it.next())?,
            "--json"             => as_json = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            p => path = Some(p.to_string()),
        }
    }
    let path = path.ok_or_else(|| "missing frame path".to_string())?;
    Ok((path, config, as_json))
}

fn threshold(flag: &str, value: Option<&String>) -> Result<f32, String> {
    value
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|t| *t > 0.0)
        .ok_or_else(|| format!("{} needs a positive number", flag))
}
