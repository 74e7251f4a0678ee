use flagvar::{Outcome, Parser};

fn main() {
    env_logger::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    let mut integer = 0;
    let mut text = String::new();
    let mut flag = false;

    let mut parser = Parser::new();
    parser.int_var(&mut integer, "integer", 42, "Value of i");
    parser.string_var(&mut text, "some_string_val", "abc", "Value of s");
    parser.bool_var(&mut flag, "xybool", true, "Value of b");

    let outcome = parser.parse(&argv);
    drop(parser);

    match outcome {
        Outcome::Help => {}
        Outcome::Continue { errors, leftovers } => {
            for error in &errors {
                eprintln!("{error}");
            }

            println!("{integer} {text} {flag}");

            if !leftovers.is_empty() {
                println!("leftovers: {leftovers:?}");
            }
        }
    }
}
