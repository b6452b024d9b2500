//! gmdata CLI - Tool for inspecting raw animation curve records.

use std::env;
use std::process;

use gmdata::core::GmVersion;
use gmdata::io::{Reader, Source};
use gmdata::model::{AnimationCurve, ChannelFunction, GraphType};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut verbose = false;
    let mut include_name = true;
    let mut base_version = GmVersion::new(2, 0, 0);
    let mut filtered_args: Vec<&str> = Vec::new();

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--no-name" => include_name = false,
            "--version" => {
                let Some(value) = iter.next() else {
                    eprintln!("--version requires an argument (e.g. 2.3.1)");
                    process::exit(1);
                };
                match parse_version(value) {
                    Some(v) => base_version = v,
                    None => {
                        eprintln!("Invalid version: {}", value);
                        process::exit(1);
                    }
                }
            }
            _ => filtered_args.push(arg),
        }
    }

    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    if filtered_args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    match filtered_args[0] {
        "info" | "i" => cmd_info(filtered_args[1], base_version, include_name),
        "scan" | "s" => cmd_scan(filtered_args[1], base_version, include_name),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [flags] <file>", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  info, i    Parse a raw curve record and print its structure");
    eprintln!("  scan, s    Count-only pass: child totals and detected version");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --version <a.b.c>  Base file version before detection (default 2.0.0)");
    eprintln!("  --no-name          Record has no leading name reference");
    eprintln!("  -v, --verbose      Enable debug logging");
}

fn parse_version(s: &str) -> Option<GmVersion> {
    let mut parts = s.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let release = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(GmVersion::new(major, minor, release))
}

fn open_or_die(path: &str) -> Source {
    match Source::open(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to open {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn cmd_info(path: &str, base_version: GmVersion, include_name: bool) {
    let source = open_or_die(path);
    let mut reader = Reader::new(&source, base_version);

    // Detect the point layout before the real parse.
    if let Err(e) = reader.look_ahead(|r| AnimationCurve::scan_opts(r, include_name)) {
        eprintln!("Scan failed: {}", e);
        process::exit(1);
    }

    let curve = match AnimationCurve::read_opts(&mut reader, include_name) {
        Ok(curve) => curve,
        Err(e) => {
            eprintln!("Parse failed: {}", e);
            process::exit(1);
        }
    };

    println!("version:    {}", reader.version());
    if include_name {
        println!("name ref:   {}", curve.name.raw());
    }
    println!("graph type: {}", graph_type_name(curve.graph_type));
    println!("channels:   {}", curve.channels.len());

    for (i, channel) in curve.channels.iter().enumerate() {
        println!(
            "  [{}] name ref {}, {}, {} iterations, {} points",
            i,
            channel.name.raw(),
            function_name(channel.function),
            channel.iterations,
            channel.points.len()
        );
        for point in &channel.points {
            println!(
                "      x {:>10.4}  value {:>10.4}  handles ({:.4}, {:.4}) ({:.4}, {:.4})",
                point.x,
                point.value,
                point.bezier_x0,
                point.bezier_y0,
                point.bezier_x1,
                point.bezier_y1
            );
        }
    }
}

fn cmd_scan(path: &str, base_version: GmVersion, include_name: bool) {
    let source = open_or_die(path);
    let mut reader = Reader::new(&source, base_version);

    match AnimationCurve::scan_opts(&mut reader, include_name) {
        Ok(total) => {
            println!("records:  {}", total);
            println!("consumed: {} of {} bytes", reader.abs_position(), reader.len());
            println!("version:  {}", reader.version());
        }
        Err(e) => {
            eprintln!("Scan failed: {}", e);
            process::exit(1);
        }
    }
}

fn graph_type_name(graph_type: GraphType) -> String {
    match graph_type {
        GraphType::Unknown0 => "unknown0".into(),
        GraphType::Unknown1 => "unknown1".into(),
        GraphType::Other(raw) => format!("other({})", raw),
    }
}

fn function_name(function: ChannelFunction) -> String {
    match function {
        ChannelFunction::Linear => "linear".into(),
        ChannelFunction::Smooth => "smooth".into(),
        ChannelFunction::Other(raw) => format!("other({})", raw),
    }
}
