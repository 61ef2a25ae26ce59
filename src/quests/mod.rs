use consts::PLACE_TYPES;
use rand::Rng;

pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;

pub fn random_clue() -> String {
    let mut rng = rand::thread_rng();
    let place_type = PLACE_TYPES[rng.gen_range(0..PLACE_TYPES.len())];
    format!("Can you find this {place_type}?")
}
