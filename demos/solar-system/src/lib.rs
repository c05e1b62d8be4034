use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
mod clock;
mod controls;
pub mod error;
mod follow;
pub mod game;
mod labels;
mod orbit;
mod registry;
mod state;
use game::Orrery;

orrery_web::export_game!(Orrery, "solar-system");
