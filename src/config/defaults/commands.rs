pub fn prefix() -> char {
    '/'
}

pub fn help_command() -> String {
    "help".to_string()
}
