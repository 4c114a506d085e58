pub mod stage0_normalize;
pub mod stage1_clarity;
pub mod stage2_tone;
pub mod stage3_score;
pub mod stage4_feedback;

pub use stage0_normalize::*;
pub use stage1_clarity::*;
pub use stage2_tone::*;
pub use stage3_score::*;
pub use stage4_feedback::*;
