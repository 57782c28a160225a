//! List selectable levels.

use otr_swing_model::{BatSpeedLevel, ExitVelocityLevel};

pub fn run() -> anyhow::Result<()> {
    println!("Bat speed levels:");
    for level in BatSpeedLevel::ALL {
        println!("  {level}");
    }
    println!();

    println!("Exit velocity levels:");
    for level in ExitVelocityLevel::ALL {
        println!("  {level}");
    }
    Ok(())
}
