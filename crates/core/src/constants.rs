/// Maximum accepted length of a goal name, in characters.
pub const MAX_GOAL_NAME_LENGTH: usize = 255;
