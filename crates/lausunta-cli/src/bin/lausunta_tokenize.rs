// lausunta-tokenize: Show how text is split for scoring.
//
// Reads text from stdin and prints the reference tokens with their kinds
// and character ranges, or with --words the lowercase words a transcript
// is reduced to.
//
// Usage:
//   lausunta-tokenize [--words] [--json]

use std::io::{self, Read, Write};

use clap::Parser;
use lausunta_core::token::Token;
use lausunta_score::tokenizer::{tokenize, words_of};

/// Tokenize text the way the scorer does.
#[derive(Parser)]
#[command(name = "lausunta-tokenize")]
struct Cli {
    /// Print transcript words instead of reference tokens.
    #[arg(long)]
    words: bool,

    /// Print JSON instead of one line per token.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lausunta_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words {
        let words = words_of(&input);
        if cli.json {
            let _ = writeln!(out, "{}", serde_json::Value::from(words));
        } else {
            for word in &words {
                let _ = writeln!(out, "{word}");
            }
        }
        return;
    }

    let tokens = tokenize(&input);
    if cli.json {
        match serde_json::to_string(&tokens) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => lausunta_cli::fatal(&e.to_string()),
        }
        return;
    }
    for token in &tokens {
        let _ = writeln!(out, "{}", token_line(token));
    }
}

fn token_line(token: &Token) -> String {
    format!(
        "{:13} [{:>4}..{:>4}]: {}",
        token.kind.label(),
        token.pos,
        token.pos + token.token_len,
        lausunta_cli::escape_control(&token.text)
    )
}
