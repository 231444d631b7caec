pub mod creatures;

pub use creatures::{Creature, CreatureKind, School};
