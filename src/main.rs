// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! masklog CLI
//!
//! Sends one request through the logging interceptor and prints the body.

use std::env;
use std::process::ExitCode;

use masklog::{HttpClient, LoggingConfig, LoggingInterceptor, Request};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "masklog=info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => match FetchArgs::parse(&args[2..]) {
            Ok(fetch) => fetch_url(fetch).await,
            Err(msg) => {
                eprintln!("{}", msg);
                eprintln!("Usage: masklog fetch <url> [OPTIONS]");
                ExitCode::from(1)
            }
        },
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("masklog {}", masklog::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"masklog - HTTP request/response logging with header masking

USAGE:
    masklog <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>     Send a GET request through the logging interceptor
    help            Show this help message
    version         Show version information

FETCH OPTIONS:
    --config <file>          Load logging configuration from a JSON file
    --include-payload        Log response bodies
    --mask <name:retain>     Mask a header, keeping <retain> chars at each end
    --header <name:value>    Add a request header

EXAMPLES:
    masklog fetch https://example.com --include-payload
    masklog fetch https://api.example.com -H "authorization:Bearer abc123" --mask authorization:3
"#
    );
}

struct FetchArgs {
    url: String,
    config: LoggingConfig,
    headers: Vec<(String, String)>,
}

impl FetchArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut url = None;
        let mut config = LoggingConfig::default();
        let mut headers = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => {
                    let path = iter.next().ok_or("--config needs a file")?;
                    let loaded = LoggingConfig::from_file(path).map_err(|e| e.to_string())?;
                    config.include_payload |= loaded.include_payload;
                    config.masking_rules.extend(loaded.masking_rules);
                }
                "--include-payload" => config.include_payload = true,
                "--mask" => {
                    let spec = iter.next().ok_or("--mask needs <name:retain>")?;
                    let (name, retain) = split_pair(spec)?;
                    let retain: usize = retain
                        .parse()
                        .map_err(|_| format!("Invalid retain length in '{}'", spec))?;
                    config = config.mask(name, retain);
                }
                "--header" | "-H" => {
                    let spec = iter.next().ok_or("--header needs <name:value>")?;
                    let (name, value) = split_pair(spec)?;
                    headers.push((name.to_string(), value.to_string()));
                }
                other if other.starts_with('-') => return Err(format!("Unknown option: {}", other)),
                other => url = Some(other.to_string()),
            }
        }

        config.validate().map_err(|e| e.to_string())?;

        Ok(Self {
            url: url.ok_or("Missing <url>")?,
            config,
            headers,
        })
    }
}

fn split_pair(spec: &str) -> Result<(&str, &str), String> {
    spec.split_once(':')
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("Expected <name:value>, got '{}'", spec))
}

async fn fetch_url(args: FetchArgs) -> ExitCode {
    let http = match HttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut request = match Request::get(&args.url) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid URL {}: {}", args.url, e);
            return ExitCode::from(1);
        }
    };
    for (name, value) in &args.headers {
        request = request.append_header(name, value);
    }
    let request = http.prepare(request);
    let client = LoggingInterceptor::new(http, args.config);

    let mut response = match client.intercept(request, bytes::Bytes::new()).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Request failed: {}", e);
            return ExitCode::from(1);
        }
    };

    match response.text().await {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to read body: {}", e);
            ExitCode::from(1)
        }
    }
}
