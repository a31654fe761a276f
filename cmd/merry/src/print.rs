use std::fmt::Display;

/// Operator-facing output. Success lines go to stdout so they can be piped;
/// errors go to stderr. `--quiet` silences everything.
#[derive(Clone)]
pub struct Print {
    pub quiet: bool,
}

impl Print {
    pub fn new(quiet: bool) -> Print {
        Print { quiet }
    }

    pub fn print<T: Display + Sized>(&self, message: T) {
        if !self.quiet {
            print!("{message}");
        }
    }

    pub fn println<T: Display + Sized>(&self, message: T) {
        if !self.quiet {
            println!("{message}");
        }
    }

    pub fn error<T: Display + Sized>(&self, message: T) {
        if !self.quiet {
            eprint!("❌ {message}");
        }
    }

    pub fn errorln<T: Display + Sized>(&self, message: T) {
        if !self.quiet {
            eprintln!("❌ {message}");
        }
    }
}

macro_rules! create_print_functions {
    ($name:ident, $nameln:ident, $icon:expr) => {
        impl Print {
            #[allow(dead_code)]
            pub fn $name<T: Display + Sized>(&self, message: T) {
                if !self.quiet {
                    print!("{} {}", $icon, message);
                }
            }

            #[allow(dead_code)]
            pub fn $nameln<T: Display + Sized>(&self, message: T) {
                if !self.quiet {
                    println!("{} {}", $icon, message);
                }
            }
        }
    };
}

create_print_functions!(check, checkln, "✅");
create_print_functions!(info, infoln, "ℹ️");
create_print_functions!(link, linkln, "🔗");
create_print_functions!(warn, warnln, "⚠️");
