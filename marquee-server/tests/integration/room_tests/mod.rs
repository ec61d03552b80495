pub mod test_rooms_are_isolated;
