//! bson dump of a densest common subgraph result.
//!
//! The document has 2 keys:
//! - "header" : a [DcsBsonHeader] giving a format version, input graph names, number of nodes,
//!   density found, highest density of first pass, a flag telling if this density was reached and the computation time.
//! - "nodes" : the sorted array of node ids. As bson has no unsigned integers, ids are encoded as i64.

use anyhow::anyhow;

use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::graph::PeelGraph;
use crate::structure::dcs::DcsResult;

/// version of dump format
pub const DCS_BSON_VERSION: i64 = 1;

/// header of the bson document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcsBsonHeader {
    pub version: i64,
    /// names of input graphs
    pub sources: Vec<String>,
    pub nb_nodes: i64,
    pub density: f64,
    pub highest_density: f64,
    /// true if density reaches highest_density
    pub confirmed: bool,
    pub elapsed_secs: f64,
} // end of DcsBsonHeader

/// dumps result in path
pub fn bson_dump<G>(path: &Path, sources: &[String], result: &DcsResult<G>, elapsed_secs: f64) -> anyhow::Result<()>
where
    G: PeelGraph,
    G::Node: Into<i64>,
{
    log::debug!("entering bson_dump");
    //
    let header = DcsBsonHeader {
        version: DCS_BSON_VERSION,
        sources: sources.to_vec(),
        nb_nodes: result.get_nodes().len() as i64,
        density: result.get_density().value(),
        highest_density: result.get_highest_density().value(),
        confirmed: result.is_confirmed(),
        elapsed_secs,
    };
    let nodes: Vec<Bson> = result.get_nodes().iter().map(|n| Bson::Int64((*n).into())).collect();
    //
    let mut doc = Document::new();
    doc.insert("header", bson::to_bson(&header)?);
    doc.insert("nodes", nodes);
    //
    let fileres = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path);
    let file = match fileres {
        Ok(file) => file,
        Err(e) => {
            log::error!("bson_dump could not open file {:?}", path.as_os_str());
            return Err(anyhow!("bson_dump could not open file {} : {}", path.display(), e));
        }
    };
    let mut bufwriter = BufWriter::new(file);
    doc.to_writer(&mut bufwriter)?;
    bufwriter.flush()?;
    log::info!("dump bson in {} done", path.display());
    Ok(())
} // end of bson_dump

/// reloads header and node ids dumped by [bson_dump]
pub fn bson_reload(path: &Path) -> anyhow::Result<(DcsBsonHeader, Vec<i64>)> {
    let fileres = OpenOptions::new().read(true).open(path);
    let file = match fileres {
        Ok(file) => file,
        Err(e) => {
            log::error!("bson_reload could not open file {:?}", path.as_os_str());
            return Err(anyhow!("bson_reload could not open file {} : {}", path.display(), e));
        }
    };
    let mut bufreader = BufReader::new(file);
    let doc = Document::from_reader(&mut bufreader)?;
    //
    let bson_header = doc
        .get("header")
        .ok_or_else(|| anyhow!("bson_reload : no header in {}", path.display()))?;
    let header: DcsBsonHeader = bson::from_bson(bson_header.clone())?;
    if header.version != DCS_BSON_VERSION {
        return Err(anyhow!("bson_reload : unknown format version {}", header.version));
    }
    let nodes = doc
        .get_array("nodes")?
        .iter()
        .map(|b| b.as_i64().ok_or_else(|| anyhow!("bson_reload : node is not an i64 : {:?}", b)))
        .collect::<anyhow::Result<Vec<i64>>>()?;
    if nodes.len() as i64 != header.nb_nodes {
        return Err(anyhow!(
            "bson_reload : header announces {} nodes, got {}",
            header.nb_nodes,
            nodes.len()
        ));
    }
    Ok((header, nodes))
} // end of bson_reload

// end of mod tests
