pub fn thread_list_width() -> u16 {
    24
}

pub fn user_color() -> String {
    "cyan".to_string()
}

pub fn assistant_color() -> String {
    "white".to_string()
}

pub fn local_color() -> String {
    "darkgray".to_string()
}
