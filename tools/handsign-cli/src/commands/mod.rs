pub mod check;
pub mod profile;
pub mod replay;
pub mod synth;
