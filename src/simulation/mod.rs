pub mod modifiers;
pub mod traffic;
