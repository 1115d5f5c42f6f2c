//! SealText 命令行入口
//!
//! 用法：
//!   sealtext encrypt <password> <input>
//!   sealtext decrypt <password> <token>
//!   sealtext demo
//!
//! 设计原则：
//! - 只调用库暴露的 encrypt / decrypt，自身不持有任何密码学状态
//! - 错误信息中不包含密码或明文

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use tracing::Level;

use sealtext::SealTextError;

#[derive(Parser)]
#[command(
    name = "sealtext",
    version,
    about = "Password-based AES-256-GCM text encryption (UTF-8, any script)."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt text into a base64 token.
    Encrypt {
        /// Password used to derive the key.
        password: String,

        /// Text to encrypt (a file path with --file).
        input: String,

        /// Read the text to encrypt from the file at <input>.
        #[arg(short, long)]
        file: bool,
    },

    /// Decrypt a base64 token back to text.
    Decrypt {
        /// Password used to derive the key.
        password: String,

        /// Token to decrypt (a file path with --file).
        token: String,

        /// Read the token from the file at <token>.
        #[arg(short, long)]
        file: bool,
    },

    /// Run the built-in self test over mixed-script samples.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Some(Command::Encrypt {
            password,
            input,
            file,
        }) => run_encrypt(&password, &input, file).map(|()| ExitCode::SUCCESS),
        Some(Command::Decrypt {
            password,
            token,
            file,
        }) => run_decrypt(&password, &token, file).map(|()| ExitCode::SUCCESS),
        Some(Command::Demo) => run_demo(),
        None => Cli::command()
            .print_help()
            .context("failed to print help")
            .map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn run_encrypt(password: &str, input: &str, from_file: bool) -> Result<()> {
    let result = if from_file {
        let bytes = read_input(Path::new(input))?;
        sealtext::encrypt_utf8(password, &bytes)
    } else {
        sealtext::encrypt(password, input)
    };
    let token = result.context("encryption failed")?;

    println!("{token}");
    Ok(())
}

fn run_decrypt(password: &str, token: &str, from_file: bool) -> Result<()> {
    let result = if from_file {
        let bytes = read_input(Path::new(token))?;
        String::from_utf8(bytes)
            .map_err(|_| SealTextError::InvalidEncoding)
            .and_then(|token| sealtext::decrypt(password, &token))
    } else {
        sealtext::decrypt(password, token)
    };
    let plaintext = result.context("decryption failed")?;

    println!("{plaintext}");
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

// ---------- 内置自测 ----------

const DEMO_PASSWORD: &str = "CorrectHorseBatteryStaple";
const DEMO_WRONG_PASSWORD: &str = "wrong-password";
const DEMO_SAMPLES: [&str; 3] = [
    "Hello, world!",
    "你好，世界！",
    "Testing 中英 mixed: 这是一个测试 123",
];

/// token 预览长度
const PREVIEW_LEN: usize = 60;

fn run_demo() -> Result<ExitCode> {
    println!("Running built-in self test:");

    let mut all_ok = true;
    for (i, sample) in DEMO_SAMPLES.iter().enumerate() {
        let token = sealtext::encrypt(DEMO_PASSWORD, sample).context("demo encryption failed")?;
        let recovered = sealtext::decrypt(DEMO_PASSWORD, &token).context("demo decryption failed")?;

        let ok = recovered == *sample;
        all_ok &= ok;

        println!("Sample {}: {}", i + 1, if ok { "OK" } else { "FAIL" });
        println!("  original:  {sample}");
        println!("  token:     {}...", &token[..token.len().min(PREVIEW_LEN)]);
        println!("  recovered: {recovered}");
        println!("-");
    }

    let token = sealtext::encrypt(DEMO_PASSWORD, DEMO_SAMPLES[0]).context("demo encryption failed")?;
    match sealtext::decrypt(DEMO_WRONG_PASSWORD, &token) {
        Err(SealTextError::AuthenticationFailure) => {
            println!("Wrong password check: OK (decryption rejected)");
        }
        Err(e) => return Err(e).context("wrong password check failed unexpectedly"),
        Ok(_) => {
            println!("Wrong password check: FAIL (decryption unexpectedly succeeded)");
            return Ok(ExitCode::from(2));
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
