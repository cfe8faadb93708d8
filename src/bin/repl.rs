use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ranged = env::args().any(|arg| arg == "--ranged");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        let line = line?;
        if !line.trim().is_empty() {
            if ranged {
                match dice_notation::roll_ranged(&line) {
                    Ok(rolls) => {
                        for roll in &rolls {
                            println!("{}", roll);
                        }
                    }
                    Err(why) => eprintln!("{}", why),
                }
            } else {
                match dice_notation::roll(&line) {
                    Ok(rolls) => {
                        for roll in &rolls {
                            println!("{}", roll);
                        }
                    }
                    Err(why) => eprintln!("{}", why),
                }
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
