pub mod app;
pub mod bubbles;
pub mod feedback_banner;
pub mod game_stats;
pub mod mermaid_reveal;
pub mod not_found;
pub mod ocean_canvas;
pub mod tts_button;
pub mod victory_screen;
pub mod word_choice;
pub mod word_match_game;
