use anyhow::Result;
use concierge_engine::{Concierge, EngineError, SUGGESTED_QUESTIONS};
use std::io::{self, BufRead, Write};

/// Line-oriented chat session on stdin/stdout. The presentation mirrors the
/// original chat widget: a welcome message with suggested questions, one
/// decision per input line, and a question helper after misses.
pub fn run(concierge: &Concierge) -> Result<()> {
    println!("Hi! Ask me anything about the wedding. (empty line or \"quit\" to leave)");
    if concierge.record_count() == 0 {
        println!("(The Q&A feed could not be loaded, so I can only point you at page sections.)");
    } else {
        println!("Try asking:");
        for question in SUGGESTED_QUESTIONS.iter().take(4) {
            println!("  - {question}");
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() || query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }

        match concierge.decide(query) {
            Ok(decision) => crate::print_decision(&decision),
            Err(EngineError::NotReady) => {
                println!("Data is still loading, please wait...");
            }
        }
        println!();
    }

    println!("Bye! See you at the wedding.");
    Ok(())
}
