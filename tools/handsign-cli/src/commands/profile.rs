//! Print a built-in classifier profile.

use handsign_gesture_core::ClassifierProfile;

pub fn run(name: String) -> anyhow::Result<()> {
    let profile = ClassifierProfile::builtin(&name)
        .ok_or_else(|| anyhow::anyhow!("Unknown profile '{name}' (expected video or live)"))?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
