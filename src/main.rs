/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * Command-line front end. Reads one signature (argument or stdin) and
 * prints it converted, or its parsed structure as JSON.
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the PARAMSHIFT project.
 *
 * PARAMSHIFT is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use paramshift::diagnostics::DiagnosticPrinter;
use paramshift::{convert_signature, parse_function, Notation, ParseError};

#[derive(Parser, Debug)]
#[command(name = "paramshift", version, about = "Convert Dart parameter lists between positional and named notation")]
struct Cli {
    /// Signature to convert. Read from stdin when omitted.
    signature: Option<String>,

    /// Notation to convert the parameter list to
    #[arg(long, default_value = "named")]
    to: Notation,

    /// Print the parsed signature as JSON instead of converting it
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Parse errors were already printed as a full diagnostic.
            if err.downcast_ref::<ParseError>().is_none() {
                eprintln!("error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (origin, source) = match &cli.signature {
        Some(signature) => ("<argument>", signature.clone()),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read signature from stdin")?;
            ("<stdin>", buf)
        }
    };

    debug!("read {} byte(s) from {}", source.len(), origin);

    let output = if cli.json {
        parse_function(&source)
            .map_err(|err| report(origin, &source, err))
            .and_then(|def| serde_json::to_string_pretty(&def).map_err(Into::into))?
    } else {
        convert_signature(&source, cli.to).map_err(|err| report(origin, &source, err))?
    };

    println!("{}", output);
    Ok(())
}

/// Prints the full diagnostic and hands the error back for the exit path.
fn report(origin: &str, source: &str, err: ParseError) -> anyhow::Error {
    DiagnosticPrinter::new(origin, source).print(&err);
    anyhow::Error::new(err)
}
