use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use num_traits::ToPrimitive;
use sprs::io::{read_matrix_market, IoError};
use sprs::TriMat;
use thiserror::Error;
use tracing::{debug, info};
use crate::graph::{Graph, StructureError};
use crate::report::Report;
use crate::tokenizer::{is_blank, is_comment, LineInts, Lines, TokenError};
use crate::topology::Topology;

/// Marker of comment lines in graph files.
pub const GRAPH_COMMENT: u8 = b'%';

/// Default marker of comment lines in partition files.
pub const PARTITION_COMMENT: u8 = b'c';

/// Errors raised while reading graphs and partitions.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("line {line}: malformed header, expected `n m [fmt [ncon]]`")]
    MalformedHeader { line: usize },

    #[error("multi-constraint vertex weights (ncon = {ncon}) are not supported")]
    UnsupportedConstraints { ncon: u64 },

    #[error("header declares {expected} vertices but {actual} vertex lines were found")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("number of expected half-edges {expected} not equal to number of half-edges {actual} found")]
    EdgeCountMismatch { expected: usize, actual: usize },

    #[error("line {line}: vertex {vertex} lists neighbor {neighbor}, valid ids are 1..={n}")]
    InvalidNeighbor { line: usize, vertex: usize, neighbor: u64, n: usize },

    #[error("line {line}: unexpected content after the last vertex")]
    TrailingData { line: usize },

    #[error("{value} does not fit into the target integer type")]
    ValueTooLarge { value: u64 },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("matrix market: {0}")]
    MatrixMarket(#[from] IoError),

    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },

    #[error("entry ({row}, {col}) is not a positive integral edge weight")]
    InvalidWeight { row: usize, col: usize },

    #[error("matrix market field {field:?} is not supported, expected `integer` or `real`")]
    UnsupportedMatrixField { field: String },
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReadError> {
    if !path.exists() {
        return Err(ReadError::NotFound { path: path.to_path_buf() });
    }
    std::fs::read(path).map_err(|source| ReadError::Io { path: path.to_path_buf(), source })
}

fn to_usize(value: u64) -> Result<usize, ReadError> {
    usize::try_from(value).map_err(|_| ReadError::ValueTooLarge { value })
}

/// Flags carried by the optional `fmt` field of the graph header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GraphFormat {
    vertex_sizes: bool,
    vertex_weights: bool,
    edge_weights: bool,
}

impl GraphFormat {
    /// `fmt` holds up to three binary digits, right aligned: `1` enables edge
    /// weights, `10` vertex weights and `100` vertex sizes.
    fn parse(fmt: &[u8]) -> Option<Self> {
        if fmt.len() > 3 || !fmt.iter().all(|b| matches!(b, b'0' | b'1')) {
            return None;
        }
        let flag = |position: usize| fmt.len() > position && fmt[fmt.len() - 1 - position] == b'1';
        Some(Self {
            vertex_sizes: flag(2),
            vertex_weights: flag(1),
            edge_weights: flag(0),
        })
    }
}

struct Header {
    n: usize,
    m: usize,
    format: GraphFormat,
}

fn parse_header(line: &[u8], line_no: usize) -> Result<Header, ReadError> {
    let malformed = || ReadError::MalformedHeader { line: line_no };
    let tokens: Vec<&[u8]> = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() < 2 || tokens.len() > 4 {
        return Err(malformed());
    }

    let mut counts = LineInts::new(line, line_no);
    let n = to_usize(counts.expect_next()?)?;
    let m = to_usize(counts.expect_next()?)?;
    let format = match tokens.get(2) {
        Some(fmt) => GraphFormat::parse(fmt).ok_or_else(malformed)?,
        None => GraphFormat::default(),
    };
    if let Some(ncon) = tokens.get(3) {
        let ncon = LineInts::new(ncon, line_no).expect_next()?;
        if ncon > 1 {
            return Err(ReadError::UnsupportedConstraints { ncon });
        }
    }
    Ok(Header { n, m, format })
}

/// Parse a graph given as adjacency lists.
///
/// The input starts with optional `%` comment lines followed by the header
/// `n m [fmt [ncon]]`, then one line per vertex listing its (optional) size,
/// its (optional) weight and its neighbors as 1-based ids, each optionally
/// followed by the edge weight. Every edge must be listed from both of its
/// endpoints, which the header counts once.
pub fn parse_metis_graph(input: &[u8]) -> Result<Graph, ReadError> {
    let mut lines = Lines::new(input);
    let (header_line, header) = lines
        .next_skipping(GRAPH_COMMENT)
        .ok_or(ReadError::MalformedHeader { line: 1 })?;
    let Header { n, m, format } = parse_header(header, header_line)?;
    let expected_half_edges = m.checked_mul(2).ok_or(ReadError::ValueTooLarge { value: m as u64 })?;

    // The header is not trusted for large allocations, every half-edge takes at least two bytes.
    let capacity = expected_half_edges.min(input.len() / 2 + 1);
    let mut vertex_weights = Vec::with_capacity(n.min(input.len()));
    let mut neighborhood_start = Vec::with_capacity(n.min(input.len()) + 1);
    let mut targets = Vec::with_capacity(capacity);
    let mut edge_weights = Vec::with_capacity(capacity);
    neighborhood_start.push(0);

    for vertex in 0..n {
        let (line_no, line) = lines
            .next_skipping(GRAPH_COMMENT)
            .ok_or(ReadError::VertexCountMismatch { expected: n, actual: vertex })?;
        let mut ints = LineInts::new(line, line_no);

        if format.vertex_sizes {
            ints.expect_next()?;
        }
        let vertex_weight = if format.vertex_weights { ints.expect_next()? } else { 1 };
        vertex_weights.push(vertex_weight);

        while let Some(neighbor) = ints.next() {
            let neighbor = neighbor?;
            if neighbor == 0 || neighbor > n as u64 {
                return Err(ReadError::InvalidNeighbor { line: line_no, vertex: vertex + 1, neighbor, n });
            }
            let edge_weight = if format.edge_weights { ints.expect_next()? } else { 1 };
            targets.push((neighbor - 1) as usize);
            edge_weights.push(edge_weight);
        }
        neighborhood_start.push(targets.len());
    }

    if let Some((line, _)) = lines.find(|(_, line)| !is_blank(line) && !is_comment(line, GRAPH_COMMENT)) {
        return Err(ReadError::TrailingData { line });
    }
    if targets.len() != expected_half_edges {
        return Err(ReadError::EdgeCountMismatch { expected: expected_half_edges, actual: targets.len() });
    }

    let graph = Graph::from_csr(vertex_weights, neighborhood_start, targets, edge_weights)?;
    debug!(
        n = graph.len(),
        m = graph.num_edges(),
        vertex_weight = graph.total_vertex_weight(),
        edge_weight = graph.total_edge_weight(),
        "parsed graph"
    );
    Ok(graph)
}

/// Read a graph file in adjacency list format.
pub fn read_metis_graph(file_path: &Path) -> Result<Graph, ReadError> {
    let bytes = read_file(file_path)?;
    let graph = parse_metis_graph(&bytes)?;
    info!(path = %file_path.display(), n = graph.len(), m = graph.num_edges(), "loaded graph");
    Ok(graph)
}

/// Parse a partition: one location id per line, in vertex order.
///
/// Blank lines and lines starting with `comment` are skipped, anything after
/// the first integer of a line is ignored.
pub fn parse_partition(input: &[u8], comment: u8) -> Result<Vec<usize>, ReadError> {
    let mut partition = Vec::new();
    let mut lines = Lines::new(input);
    while let Some((line_no, line)) = lines.next_skipping(comment) {
        if let Some(part) = LineInts::new(line, line_no).next() {
            partition.push(to_usize(part?)?);
        }
    }
    Ok(partition)
}

/// Read a partition file, see [`parse_partition`].
pub fn read_partition(file_path: &Path, comment: u8) -> Result<Vec<usize>, ReadError> {
    let bytes = read_file(file_path)?;
    let partition = parse_partition(&bytes, comment)?;
    info!(path = %file_path.display(), n = partition.len(), "loaded partition");
    Ok(partition)
}

/// Value type declared by the `%%MatrixMarket` banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatrixField {
    Integer,
    Real,
}

/// Read the field of the banner line, e.g. `integer` in
/// `%%MatrixMarket matrix coordinate integer symmetric`.
fn read_matrix_market_field(file_path: &Path) -> Result<MatrixField, ReadError> {
    let io_error = |source| ReadError::Io { path: file_path.to_path_buf(), source };
    let mut banner = String::new();
    BufReader::new(File::open(file_path).map_err(io_error)?)
        .read_line(&mut banner)
        .map_err(io_error)?;

    let field = banner.split_whitespace().nth(3).unwrap_or_default().to_ascii_lowercase();
    match field.as_str() {
        "integer" => Ok(MatrixField::Integer),
        "real" => Ok(MatrixField::Real),
        _ => Err(ReadError::UnsupportedMatrixField { field }),
    }
}

/// Convert a sparse matrix into a graph.
///
/// Only the strictly lower triangle is read: entry `(i, j)` with `j < i`
/// becomes the undirected edge `{i, j}`. Symmetric matrices are expected,
/// the diagonal is ignored. Values must be positive integers.
fn graph_from_tri_mat<N: ToPrimitive>(tri_mat: &TriMat<N>) -> Result<Graph, ReadError> {
    let (rows, cols) = tri_mat.shape();
    if rows != cols {
        return Err(ReadError::NonSquare { rows, cols });
    }

    let mut edges = Vec::with_capacity(tri_mat.nnz() / 2);
    let entries = tri_mat.row_inds().iter().zip(tri_mat.col_inds()).zip(tri_mat.data());
    for ((&row, &col), value) in entries {
        if col >= row {
            continue;
        }
        let weight = value
            .to_u64()
            .filter(|&w| w > 0 && value.to_f64() == w.to_f64());
        let weight = weight.ok_or(ReadError::InvalidWeight { row, col })?;
        edges.push((row, col, weight));
    }

    Ok(Graph::from_edges(vec![1; rows], &edges)?)
}

/// Read a matrix market file and output Graph struct.
///
/// `integer` and `real` coordinate files are supported, `pattern` and
/// `complex` files are rejected.
pub fn read_matrix_market_as_graph(file_path: &Path) -> Result<Graph, ReadError> {
    if !file_path.exists() {
        return Err(ReadError::NotFound { path: file_path.to_path_buf() });
    }
    // read the matrix market file as a TriMat with edge weights.
    let graph = match read_matrix_market_field(file_path)? {
        MatrixField::Integer => graph_from_tri_mat(&read_matrix_market::<i64, usize, _>(file_path)?)?,
        MatrixField::Real => graph_from_tri_mat(&read_matrix_market::<f64, usize, _>(file_path)?)?,
    };
    info!(path = %file_path.display(), n = graph.len(), m = graph.num_edges(), "loaded matrix market graph");
    Ok(graph)
}

/// Write the complete graph over the leaf locations of `topology`.
///
/// The edge between two locations is weighted by their communication
/// distance. The output uses the adjacency list format with edge weights, so
/// it can be read back with [`read_metis_graph`].
pub fn write_communication_graph<W: Write>(topology: &Topology, out: W) -> std::io::Result<()> {
    let k = topology.num_locations();
    let mut out = BufWriter::new(out);
    writeln!(out, "{} {} 001", k, k * k.saturating_sub(1) / 2)?;
    for location in 0..k {
        let mut first = true;
        for other in (0..k).filter(|&other| other != location) {
            let (distance, _level) = topology.distance(location, other).unwrap_or((0, 0));
            if !first {
                write!(out, " ")?;
            }
            write!(out, "{} {}", other + 1, distance)?;
            first = false;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Write the communication graph of `topology` to a file.
pub fn write_communication_graph_to_file(topology: &Topology, file_path: &Path) -> std::io::Result<()> {
    write_communication_graph(topology, File::create(file_path)?)?;
    info!(path = %file_path.display(), k = topology.num_locations(), "wrote communication graph");
    Ok(())
}

/// Write the report as pretty printed JSON.
pub fn write_report_to_file(report: &Report, file_path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use itertools::assert_equal;
    use tempfile::tempdir;
    use crate::Evaluate;
    use crate::imbalance::{PartitionBalance, PartitionWeights};
    use crate::metrics::HierarchicalMetrics;
    use super::*;

    fn create_mock_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let file_path = dir.join(filename);
        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    #[test]
    fn test_parse_unweighted_cycle() {
        // Arrange
        let content = "% 4-cycle\n4 4\n2 4\n1 3\n2 4\n1 3\n";

        // Act
        let graph = parse_metis_graph(content.as_bytes()).unwrap();

        // Assert
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.total_vertex_weight(), 4);
        assert_eq!(graph.total_edge_weight(), 4);
        assert_equal(graph.neighbors(0), [(1, 1), (3, 1)]);
        assert_equal(graph.neighbors(3), [(0, 1), (2, 1)]);
    }

    #[test]
    fn test_parse_vertex_and_edge_weights() {
        // Arrange
        let content = "3 2 011\n5 2 7 3 1\n2 1 7\n  9   1 1  \n";

        // Act
        let graph = parse_metis_graph(content.as_bytes()).unwrap();

        // Assert
        assert_equal(graph.vertex_weights().iter().copied(), [5, 2, 9]);
        assert_equal(graph.neighbors(0), [(1, 7), (2, 1)]);
        assert_equal(graph.neighbors(1), [(0, 7)]);
        assert_equal(graph.neighbors(2), [(0, 1)]);
        assert_eq!(graph.total_vertex_weight(), 16);
        assert_eq!(graph.total_edge_weight(), 8);
    }

    #[test]
    fn test_short_fmt_is_right_aligned() {
        // Arrange
        let edge_weights_only = "2 1 1\n2 4\n1 4\n";
        let vertex_weights_only = "2 1 10\n3 2\n4 1\n";

        // Act
        let first = parse_metis_graph(edge_weights_only.as_bytes()).unwrap();
        let second = parse_metis_graph(vertex_weights_only.as_bytes()).unwrap();

        // Assert
        assert_equal(first.neighbors(0), [(1, 4)]);
        assert_eq!(first.total_vertex_weight(), 2);
        assert_equal(second.vertex_weights().iter().copied(), [3, 4]);
        assert_eq!(second.total_edge_weight(), 1);
    }

    #[test]
    fn test_vertex_sizes_are_skipped() {
        let graph = parse_metis_graph(b"2 1 111 1\n8 3 2 5\n8 4 1 5\n").unwrap();
        assert_equal(graph.vertex_weights().iter().copied(), [3, 4]);
        assert_equal(graph.neighbors(1), [(0, 5)]);
    }

    #[test]
    fn test_isolated_vertices_and_inner_comments() {
        // Arrange
        let content = "3 1\n2\n% between vertices\n1\n\n";

        // Act
        let graph = parse_metis_graph(content.as_bytes()).unwrap();

        // Assert
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.degree(2), 0);
    }

    #[test]
    fn test_edge_count_mismatch_fails() {
        // Arrange
        let content = "3 3\n2 3\n1\n1\n";

        // Act
        let result = parse_metis_graph(content.as_bytes());

        // Assert
        assert!(matches!(result, Err(ReadError::EdgeCountMismatch { expected: 6, actual: 4 })));
    }

    #[test]
    fn test_missing_vertex_lines_fail() {
        let result = parse_metis_graph(b"3 1\n2\n1\n");
        assert!(matches!(result, Err(ReadError::VertexCountMismatch { expected: 3, actual: 2 })));
    }

    #[test]
    fn test_trailing_vertex_lines_fail() {
        let result = parse_metis_graph(b"1 0\n\n2\n");
        assert!(matches!(result, Err(ReadError::TrailingData { line: 3 })));
    }

    #[test]
    fn test_indented_trailing_comment_is_skipped() {
        let graph = parse_metis_graph(b"1 0\n\n  % note\n").unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_edge_weights_beyond_signed_range() {
        // Arrange
        let content = b"2 1 001\n2 9223372036854775808\n1 9223372036854775808\n";

        // Act
        let graph = parse_metis_graph(content).unwrap();

        // Assert
        assert_eq!(graph.total_edge_weight(), 1 << 63);
    }

    #[test]
    fn test_vertex_weight_overflow_fails() {
        let result = parse_metis_graph(b"2 0 010\n18446744073709551615\n1\n");
        assert!(matches!(result, Err(ReadError::Structure(StructureError::WeightOverflow))));
    }

    #[test]
    fn test_invalid_neighbor_fails() {
        let result = parse_metis_graph(b"2 1\n3\n1\n");
        assert!(matches!(result, Err(ReadError::InvalidNeighbor { line: 2, vertex: 1, neighbor: 3, n: 2 })));
    }

    #[test]
    fn test_malformed_header_fails() {
        assert!(matches!(parse_metis_graph(b"% only comments\n"), Err(ReadError::MalformedHeader { line: 1 })));
        assert!(matches!(parse_metis_graph(b"4\n"), Err(ReadError::MalformedHeader { line: 1 })));
        assert!(matches!(parse_metis_graph(b"2 1 021\n"), Err(ReadError::MalformedHeader { line: 1 })));
        assert!(matches!(
            parse_metis_graph(b"2 1 010 2\n"),
            Err(ReadError::UnsupportedConstraints { ncon: 2 })
        ));
    }

    #[test]
    fn test_garbage_token_fails() {
        let result = parse_metis_graph(b"2 1\n2x\n1\n");
        assert!(matches!(result, Err(ReadError::Token(TokenError::Unexpected { line: 2, found: 'x' }))));
    }

    #[test]
    fn test_read_metis_graph_missing_file() {
        let result = read_metis_graph(Path::new("/definitely/not/here.graph"));
        assert!(matches!(result, Err(ReadError::NotFound { .. })));
    }

    #[test]
    fn test_read_metis_graph_from_file() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let path = create_mock_file(temp_dir.path(), "path.graph", "3 2\n2\n1 3\n2\n");

        // Act
        let graph = read_metis_graph(&path).unwrap();

        // Assert
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.num_edges(), 2);

        Ok(())
    }

    #[test]
    fn test_parse_partition_skips_comments() {
        // Arrange
        let content = "c partition of 4 vertices\n0\n3\n\n1 ignored\nc trailing\n2";

        // Act
        let partition = parse_partition(content.as_bytes(), PARTITION_COMMENT).unwrap();

        // Assert
        assert_equal(partition, [0, 3, 1, 2]);
    }

    #[test]
    fn test_read_partition_from_file() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let path = create_mock_file(temp_dir.path(), "part.txt", "0\n0\n1\n1\n");

        // Act
        let partition = read_partition(&path, PARTITION_COMMENT).unwrap();

        // Assert
        assert_equal(partition, [0, 0, 1, 1]);

        Ok(())
    }

    #[test]
    fn test_read_partition_missing_file() {
        let result = read_partition(Path::new("/definitely/not/here.txt"), PARTITION_COMMENT);
        assert!(matches!(result, Err(ReadError::NotFound { .. })));
    }

    #[test]
    fn test_read_matrix_market_as_graph() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "%%MatrixMarket matrix coordinate integer symmetric\n%\n3 3 4\n1 1 9\n2 1 2\n3 1 5\n3 2 1\n";
        let path = create_mock_file(temp_dir.path(), "triangle.mtx", content);

        // Act
        let graph = read_matrix_market_as_graph(&path).unwrap();

        // Assert
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.total_edge_weight(), 8);
        assert_eq!(graph.total_vertex_weight(), 3);

        Ok(())
    }

    #[test]
    fn test_matrix_market_rejects_fractional_weights() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "%%MatrixMarket matrix coordinate real symmetric\n2 2 1\n2 1 0.5\n";
        let path = create_mock_file(temp_dir.path(), "fractional.mtx", content);

        // Act
        let result = read_matrix_market_as_graph(&path);

        // Assert
        assert!(matches!(result, Err(ReadError::InvalidWeight { row: 1, col: 0 })));

        Ok(())
    }

    #[test]
    fn test_read_matrix_market_real_with_integral_values() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "%%MatrixMarket matrix coordinate real symmetric\n3 3 2\n2 1 3.0\n3 2 4\n";
        let path = create_mock_file(temp_dir.path(), "path.mtx", content);

        // Act
        let graph = read_matrix_market_as_graph(&path).unwrap();

        // Assert
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.total_edge_weight(), 7);
        assert_equal(graph.neighbors(1), [(0, 3), (2, 4)]);

        Ok(())
    }

    #[test]
    fn test_matrix_market_rejects_pattern_files() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n2 1\n";
        let path = create_mock_file(temp_dir.path(), "pattern.mtx", content);

        // Act
        let result = read_matrix_market_as_graph(&path);

        // Assert
        assert!(matches!(result, Err(ReadError::UnsupportedMatrixField { field }) if field == "pattern"));

        Ok(())
    }

    #[test]
    fn test_files_to_report() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let graph_path = create_mock_file(temp_dir.path(), "cycle.graph", "4 4\n2 4\n1 3\n2 4\n1 3\n");
        let partition_path = create_mock_file(temp_dir.path(), "cycle.part", "0\n0\n1\n1\n");
        let report_path = temp_dir.path().join("out.json");
        let topology = Topology::from_colon_lists("2", "5").unwrap();

        // Act
        let graph = read_metis_graph(&graph_path).unwrap();
        let partition = read_partition(&partition_path, PARTITION_COMMENT).unwrap();
        let stats = HierarchicalMetrics { topology: &topology }.evaluate(&partition, &graph).unwrap();
        let weights = PartitionWeights { num_parts: 2 }.evaluate(&partition, &graph).unwrap();
        let balance = PartitionBalance { num_parts: 2 }.evaluate(&partition, &graph).unwrap();
        write_report_to_file(&Report::new(&graph, stats, weights, balance, 0.03), &report_path)?;
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report_path)?)?;

        // Assert
        assert_eq!(json["edge_cut"], 2);
        assert_eq!(json["comm_cost"], 10);
        assert_eq!(json["partition_weights"], serde_json::json!([2, 2]));

        Ok(())
    }

    #[test]
    fn test_communication_graph_round_trips_through_loader() {
        // Arrange
        let topology = Topology::new(vec![2, 2], vec![1, 10]).unwrap();
        let mut buffer = Vec::new();

        // Act
        write_communication_graph(&topology, &mut buffer).unwrap();
        let graph = parse_metis_graph(&buffer).unwrap();

        // Assert
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.num_edges(), 6);
        assert_equal(graph.neighbors(0), [(1, 1), (2, 10), (3, 10)]);
        assert_equal(graph.neighbors(3), [(0, 10), (1, 10), (2, 1)]);
    }
}
