pub mod test_invalid_player_action_is_dropped;
pub mod test_playback_defaults_for_untouched_room;
pub mod test_player_action_excludes_sender;
