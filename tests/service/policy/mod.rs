mod edit_window;
