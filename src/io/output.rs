//! Dump of the densest common subgraph found.
//!
//! The text format is a list of sorted node ids, one per line, preceded by a header of comment lines
//! giving the input graphs, the number of nodes, the density and the computation time.

use anyhow::anyhow;

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::PeelGraph;
use crate::structure::dcs::DcsResult;

/// Text (node list) or Bson.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    TEXT,
    BSON,
}

pub struct Output {
    /// describe output format
    fmt: Format,
    /// name of output file
    output_name: String,
}

impl Output {
    /// if output_name is None, default output_name will be "dcs-nodes.txt" or "dcs-nodes.bson".
    /// The extension is added to a given name.
    pub fn new(fmt: Format, output_name: &Option<String>) -> Self {
        let extension = match fmt {
            Format::TEXT => ".txt",
            Format::BSON => ".bson",
        };
        let mut output_name = match output_name {
            Some(name) => name.clone(),
            None => String::from("dcs-nodes"),
        };
        output_name.push_str(extension);
        Output { fmt, output_name }
    }
    /// get ouput format
    pub fn get_fmt(&self) -> Format {
        self.fmt
    }

    /// get output_name
    pub fn get_output_name(&self) -> &String {
        &self.output_name
    }
} // end of Output

impl Default for Output {
    fn default() -> Self {
        Output::new(Format::TEXT, &None)
    }
}

/// writes header and node list of result.
/// sources are the names of input graphs, elapsed_secs the computation time.
pub fn write_node_list<W, G>(
    writer: &mut W,
    sources: &[String],
    result: &DcsResult<G>,
    elapsed_secs: f64,
) -> anyhow::Result<()>
where
    W: Write,
    G: PeelGraph,
    G::Node: Display,
{
    writeln!(writer, "# Node list of the densest common subgraph of the following graphs:")?;
    for s in sources {
        writeln!(writer, "#   {}", s)?;
    }
    writeln!(writer, "# Number of nodes: {}", result.get_nodes().len())?;
    writeln!(writer, "# Density: {}", result.get_density())?;
    if !result.is_confirmed() {
        writeln!(
            writer,
            "# Warning: highest density found {} was not reached again, outcome : {:?}",
            result.get_highest_density(),
            result.get_outcome()
        )?;
    }
    writeln!(writer, "# Completed in {:.1} seconds", elapsed_secs)?;
    for n in result.get_nodes() {
        writeln!(writer, "{}", n)?;
    }
    Ok(())
} // end of write_node_list

/// dumps result in file path, see [write_node_list]
pub fn dump_node_list<G>(
    path: &Path,
    sources: &[String],
    result: &DcsResult<G>,
    elapsed_secs: f64,
) -> anyhow::Result<()>
where
    G: PeelGraph,
    G::Node: Display,
{
    log::info!("saving node list in {}", path.display());
    let fileres = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path);
    let file = match fileres {
        Ok(file) => file,
        Err(e) => {
            log::error!("dump_node_list could not open file {:?}", path.as_os_str());
            return Err(anyhow!("dump_node_list could not open file {} : {}", path.display(), e));
        }
    };
    let mut bufwriter = BufWriter::new(file);
    write_node_list(&mut bufwriter, sources, result, elapsed_secs)?;
    bufwriter.flush()?;
    Ok(())
} // end of dump_node_list

// end of mod tests
