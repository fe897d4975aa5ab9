pub mod common;

mod test_persistence;
mod test_sprites;
