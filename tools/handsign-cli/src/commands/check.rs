//! Validate a classifier profile file.

use std::path::PathBuf;

use handsign_gesture_core::ClassifierProfile;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Checking profile: {}", path.display());

    let profile = ClassifierProfile::load(&path).map_err(|e| {
        println!("[FAIL] {e}");
        anyhow::anyhow!("Profile is not usable")
    })?;

    println!("[OK] Profile '{}' is valid", profile.name);
    println!("     window capacity: {}", profile.window_capacity);
    println!(
        "     scales: single={} pair={}",
        profile.single_hand_scale, profile.two_hand_scale
    );
    println!(
        "     static threshold: {} ({:?})",
        profile.motion.static_threshold, profile.motion.check
    );
    println!(
        "     two-hand: {:?} < {} (mcps: {})",
        profile.two_hand.metric, profile.two_hand.threshold, profile.two_hand.include_mcps
    );
    println!("     mirrored: {}", profile.dynamic.mirror_x);

    Ok(())
}
