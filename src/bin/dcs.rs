//! an executable computing the densest common subgraph of a set of graphs.
//! example usage:
//! dcs ca-GrQc.txt
//! dcs --snapshot 10 --timeout 600 --out res layer1.txt layer2.txt layer3.txt
//! dcs --bson --delimiter tab layer1.txt layer2.txt
//!
//! Each file is an edge list (see [load_edge_list]). With more than one graph, graphs are first restricted
//! to the nodes common to all graphs.
//! The result is dumped as a sorted node list (default file dcs-nodes.txt) or in bson format.
//! Use RUST_LOG=info to follow the computation.
//!

use std::ops::ControlFlow;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command};

use cpu_time::ProcessTime;

use dcsgreedy::prelude::*;

/// arguments decoded from command line
struct DcsArgs {
    sources: Vec<String>,
    delimiter: Option<u8>,
    params: PeelParams,
    /// in seconds
    timeout: Option<f64>,
    output: Output,
}

fn parse_delimiter(arg: &str) -> Result<u8, anyhow::Error> {
    match arg {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        "blank" | " " => Ok(b' '),
        s if s.len() == 1 => Ok(s.as_bytes()[0]),
        _ => Err(anyhow!("could not parse delimiter {:?}, expecting tab, blank or one character", arg)),
    }
} // end of parse_delimiter

fn parse_args(matches: &ArgMatches) -> Result<DcsArgs, anyhow::Error> {
    log::debug!("in parse_args");
    //
    let sources: Vec<String> = match matches.values_of("graphs") {
        Some(values) => values.map(String::from).collect(),
        None => return Err(anyhow!("expecting at least one graph file")),
    };
    //
    let delimiter = match matches.value_of("delimiter") {
        Some(str) => Some(parse_delimiter(str)?),
        None => None,
    };
    //
    let mut params = PeelParams::default();
    if let Some(str) = matches.value_of("snapshot") {
        match str.parse::<usize>() {
            Ok(val) => params.set_snapshot_interval(val),
            _ => return Err(anyhow!("could not parse snapshot interval")),
        }
    }
    //
    let timeout = match matches.value_of("timeout") {
        Some(str) => match str.parse::<f64>() {
            Ok(val) if val > 0. => Some(val),
            _ => return Err(anyhow!("could not parse timeout, expecting a positive number of seconds")),
        },
        None => None,
    };
    //
    let fmt = if matches.is_present("bson") {
        Format::BSON
    } else {
        Format::TEXT
    };
    let output = Output::new(fmt, &matches.value_of("out").map(String::from));
    //
    Ok(DcsArgs {
        sources,
        delimiter,
        params,
        timeout,
        output,
    })
} // end of parse_args

fn run(args: &DcsArgs) -> Result<(), anyhow::Error> {
    //
    let sys_start = SystemTime::now();
    let mut graphs = Vec::with_capacity(args.sources.len());
    for source in &args.sources {
        let graph = load_edge_list(Path::new(source), args.delimiter)?;
        log::info!(
            "imported {} : {} nodes and {} edges",
            source,
            graph.node_count(),
            graph.edge_count()
        );
        graphs.push(graph);
    }
    log::info!(
        "imported {} graphs in {:.1} seconds",
        graphs.len(),
        sys_start.elapsed().unwrap_or_default().as_secs_f64()
    );
    //
    if graphs.len() > 1 {
        log::info!("preprocessing...");
        let sys_start = SystemTime::now();
        let nb_common = preprocess(&mut graphs)?;
        log::info!(
            "{} nodes are common to all graphs, preprocessing took {:.1} seconds",
            nb_common,
            sys_start.elapsed().unwrap_or_default().as_secs_f64()
        );
    }
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    let mut engine = PeelingEngine::new(&graphs, args.params)?;
    log::info!(
        "peeling {} graphs, snapshot interval : {}",
        graphs.len(),
        engine.get_params().get_snapshot_interval()
    );
    if let Some(timeout) = args.timeout {
        let limit = Duration::from_secs_f64(timeout);
        engine = engine.with_checkpoint(move |_: &Checkpoint| {
            if sys_start.elapsed().unwrap_or_default() > limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    }
    let result = engine.solve()?;
    let elapsed = sys_start.elapsed().unwrap_or_default().as_secs_f64();
    log::info!(
        "the greedy algorithm completed in sys time(s) {:.2e} cpu time(s) {:.2e}",
        elapsed,
        cpu_start.elapsed().as_secs_f64()
    );
    log::info!(
        "densest common subgraph : {} nodes, density : {}, outcome : {:?}",
        result.get_nodes().len(),
        result.get_density(),
        result.get_outcome()
    );
    if !result.is_confirmed() {
        log::warn!(
            "density found in first pass {} was not reached, try a smaller --snapshot",
            result.get_highest_density()
        );
    }
    if !result.get_nodes().is_empty() {
        log_result_degrees(&result)?;
    }
    //
    let path = Path::new(args.output.get_output_name());
    match args.output.get_fmt() {
        Format::TEXT => dump_node_list(path, &args.sources, &result, elapsed)?,
        Format::BSON => bson_dump(path, &args.sources, &result, elapsed)?,
    }
    Ok(())
} // end of run

pub fn main() {
    //
    dcsgreedy::init_log();
    //
    let matches = Command::new("dcs")
        .about("densest common subgraph of undirected graphs by greedy peeling")
        .arg_required_else_help(true)
        .arg(
            Arg::new("graphs")
                .takes_value(true)
                .multiple_values(true)
                .required(true)
                .help("edge list files, one per graph"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .short('d')
                .takes_value(true)
                .help("field delimiter: tab, blank or a character. Default tries tab, comma and blank"),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .takes_value(true)
                .help("number of density improvements between saves of the search space, default 100"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .takes_value(true)
                .help("stop computation after this number of seconds"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .takes_value(true)
                .help("output file name, without extension"),
        )
        .arg(
            Arg::new("bson")
                .long("bson")
                .help("dump result in bson format instead of a node list"),
        )
        .get_matches();
    //
    let args = match parse_args(&matches) {
        Ok(args) => args,
        Err(e) => {
            log::error!("error decoding arguments : {:?}", e);
            println!("error decoding arguments : {}", e);
            std::process::exit(1);
        }
    };
    //
    if let Err(e) = run(&args) {
        log::error!("dcs failed : {:?}", e);
        println!("dcs failed : {}", e);
        std::process::exit(1);
    }
} // end of main
