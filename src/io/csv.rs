//! Load an undirected graph from an edge list stored in a csv like file.
//!
//! Each line gives an edge as 2 node ids (u32), other fields are ignored.
//! Lines beginning with # or % are comments (as in Snap <https://snap.stanford.edu/data/index.html>
//! or Konect files), there is no header line.
//!
//! Self loops are skipped and duplicated edges are merged, the density algorithm assumes a simple graph.

use anyhow::anyhow;

use std::fs::OpenOptions;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;

use petgraph::graphmap::UnGraphMap;

/// delimiters tried (in this order) when none is given
pub const DELIMITERS: [u8; 3] = [b'\t', b',', b' '];

/// reads an undirected graph from filepath, with fields separated by delim.
pub fn undirected_from_csv(filepath: &Path, delim: u8) -> anyhow::Result<UnGraphMap<u32, ()>> {
    //
    let fileres = OpenOptions::new().read(true).open(filepath);
    if fileres.is_err() {
        log::error!("undirected_from_csv could not open file {:?}", filepath.as_os_str());
        return Err(anyhow!("undirected_from_csv could not open file {}", filepath.display()));
    }
    let file = fileres?;
    let bufreader = BufReader::new(file);
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(bufreader);
    //
    let mut graph = UnGraphMap::<u32, ()>::new();
    let mut nb_record = 0;
    let mut nb_self_loops = 0;
    for result in rdr.records() {
        let record = result?;
        nb_record += 1;
        // with blank as delimiter, repeated blanks give empty fields
        let mut fields = record.iter().map(|f| f.trim()).filter(|f| !f.is_empty());
        let first = match fields.next() {
            Some(f) => f,
            None => continue,
        };
        if first.starts_with('%') {
            continue;
        }
        let second = fields.next().ok_or_else(|| {
            anyhow!(
                "record {} of file {} has less than 2 fields",
                nb_record,
                filepath.display()
            )
        })?;
        let a = first
            .parse::<u32>()
            .map_err(|e| anyhow!("error decoding field 1 of record {} : {:?}, {}", nb_record, first, e))?;
        let b = second
            .parse::<u32>()
            .map_err(|e| anyhow!("error decoding field 2 of record {} : {:?}, {}", nb_record, second, e))?;
        if a == b {
            log::trace!("skipping self loop on node {}", a);
            nb_self_loops += 1;
            graph.add_node(a);
            continue;
        }
        graph.add_edge(a, b, ());
    }
    if nb_self_loops > 0 {
        log::debug!("undirected_from_csv skipped {} self loops", nb_self_loops);
    }
    log::info!(
        "loaded {:?}, nb records : {}, nb nodes : {}, nb edges : {}",
        filepath,
        nb_record,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
} // end of undirected_from_csv

/// reads an undirected graph. If no delimiter is given, tries each delimiter of [DELIMITERS].
pub fn load_edge_list(filepath: &Path, delim: Option<u8>) -> anyhow::Result<UnGraphMap<u32, ()>> {
    if let Some(delim) = delim {
        return undirected_from_csv(filepath, delim);
    }
    let mut res = Err(anyhow!("no delimiter tried"));
    for delim in DELIMITERS {
        log::debug!("load_edge_list trying reading {:?} with delimiter {:?}", filepath, delim as char);
        res = undirected_from_csv(filepath, delim);
        match &res {
            Ok(_) => break,
            Err(e) => log::debug!("reading {:?} with delimiter {:?} failed : {}", filepath, delim as char, e),
        }
    }
    if let Err(e) = &res {
        log::error!("load_edge_list failed reading {:?}, last error : {}", filepath, e);
    }
    res
} // end of load_edge_list

// end of mod tests
