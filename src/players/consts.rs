pub const DEFAULT_PLAYER_NAME: &str = "Jian Xin";

pub const MAX_PLAYER_NAME_LENGTH: usize = 20;
