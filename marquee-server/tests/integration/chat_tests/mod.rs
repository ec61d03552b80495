pub mod test_chat_history_preserves_order;
