use nom::{
    bytes::complete::{take_till, take_while},
    character::complete::{char, satisfy},
    combinator::{opt, rest},
    IResult, Parser,
};

/// A recognised command line, borrowing from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Token right after the prefix, up to the first whitespace. May be empty for a bare prefix.
    pub name: &'a str,
    /// Everything after the single whitespace character that ends the name, untouched.
    pub args: &'a str,
}

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Grammar: `<whitespace>* prefix name [<one whitespace> args]`.
pub fn parse_invocation(input: &str, prefix: char) -> IResult<&str, Invocation<'_>> {
    (
        take_while(is_space),
        char(prefix),
        take_till(is_space),
        opt(satisfy(is_space)),
        rest,
    )
        .map(|(_, _, name, _, args)| Invocation { name, args })
        .parse(input)
}

/// Returns `None` when the line is ordinary chat content.
pub fn parse_line(line: &str, prefix: char) -> Option<Invocation<'_>> {
    parse_invocation(line, prefix)
        .ok()
        .map(|(_, invocation)| invocation)
}
