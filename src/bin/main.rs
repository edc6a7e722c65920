use std::error::Error;
use std::io;
use std::io::Write;
use std::process::exit;

use clap::{Parser, ValueEnum};
use enum_map::{Enum, EnumMap, enum_map};
use log::LevelFilter;

use compact_storage::data::linear_algebra::matrix::DenseMatrix;
use compact_storage::data::list::LinkedList;
use compact_storage::data::storage::layout::Layout;
use compact_storage::data::storage::mapping::*;
use compact_storage::data::storage::packed::Packed;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "COMPACT_STORAGE_LOG";

/// What to demonstrate.
#[derive(Enum, ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum Scheme {
    RowMajor,
    ColumnMajor,
    Diagonal,
    Tridiagonal,
    LowerTriangular,
    UpperTriangular,
    Symmetric,
    List,
}

impl Scheme {
    /// Order of the demonstration matrix when none is given on the command line.
    fn default_order(self) -> usize {
        match self {
            Scheme::RowMajor | Scheme::ColumnMajor | Scheme::Diagonal => 3,
            _ => 4,
        }
    }
}

/// Demonstrates compact storage schemes for matrices, and a linked list.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Scheme to demonstrate, may be repeated; all of them when omitted
    #[arg(long, value_enum)]
    scheme: Vec<Scheme>,
    /// Order of the square matrices used in the demonstrations
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    order: Option<usize>,
    /// Log what is being packed and unpacked
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    if let Err(error) = run(&mut io::stdout().lock(), &selection(&opts.scheme), opts.order) {
        log::error!("{}", error);
        exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.parse_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Schemes to demonstrate, in declaration order; all of them when none were requested.
fn selection(requested: &[Scheme]) -> Vec<Scheme> {
    let mut selected = EnumMap::<Scheme, bool>::default();
    if requested.is_empty() {
        selected = enum_map! { _ => true };
    } else {
        for &scheme in requested {
            selected[scheme] = true;
        }
    }

    selected
        .into_iter()
        .filter_map(|(scheme, enabled)| enabled.then_some(scheme))
        .collect()
}

/// Demonstrate each scheme, followed by an empty line.
///
/// # Arguments
///
/// * `order`: order of the demonstration matrices, the scheme's default when `None`.
fn run<W: Write>(
    out: &mut W,
    schemes: &[Scheme],
    order: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    for &scheme in schemes {
        log::debug!("Demonstrating {:?}", scheme);
        demonstrate(out, scheme, order.unwrap_or(scheme.default_order()))?;
        writeln!(out)?;
    }

    Ok(())
}

/// Square matrix holding `1..=n * n`, row by row.
fn counting_matrix(n: usize) -> DenseMatrix<i64> {
    DenseMatrix::from_fn(n, n, |i, j| (i * n + j + 1) as i64)
}

/// Write the demonstration of one scheme on a matrix of order `n`.
///
/// # Errors
///
/// When the scheme can't be applied, or when writing fails.
fn demonstrate<W: Write>(out: &mut W, scheme: Scheme, n: usize) -> Result<(), Box<dyn Error>> {
    let matrix = counting_matrix(n);

    match scheme {
        Scheme::RowMajor => {
            writeln!(out, "*** Row Major Mapping ***")?;
            let packed = row_major_mapping(&matrix);
            writeln!(out, "{}", packed)?;
            writeln!(out, "Reversed Row Major:")?;
            write!(out, "{}", reverse_row_major_mapping(packed.into_data(), n, n)?)?;
        }
        Scheme::ColumnMajor => {
            writeln!(out, "*** Column Major Mapping ***")?;
            let packed = column_major_mapping(&matrix);
            writeln!(out, "{}", packed)?;
            writeln!(out, "Reversed Column Major:")?;
            write!(out, "{}", reverse_column_major_mapping(packed.into_data(), n, n)?)?;
        }
        Scheme::Diagonal => show(
            out,
            "Diagonal",
            &diagonal_mapping(&matrix)?,
            reverse_diagonal_mapping,
        )?,
        Scheme::Tridiagonal => show(
            out,
            "TriDiagonal",
            &tridiagonal_mapping(&matrix)?,
            reverse_tridiagonal_mapping,
        )?,
        Scheme::LowerTriangular => show(
            out,
            "Lower Triangular",
            &lower_triangular_mapping(&matrix)?,
            reverse_lower_triangular_mapping,
        )?,
        Scheme::UpperTriangular => show(
            out,
            "Upper Triangular",
            &upper_triangular_mapping(&matrix)?,
            reverse_upper_triangular_mapping,
        )?,
        Scheme::Symmetric => show(
            out,
            "Symmetric",
            &symmetric_mapping(&matrix)?,
            reverse_symmetric_mapping,
        )?,
        Scheme::List => {
            writeln!(out, "*** Linked List ***")?;
            let mut list = LinkedList::new();
            for value in [3, 6, 2, 8] {
                list.push_front(value);
            }
            list.push_back(1);
            writeln!(out, "{}", list)?;
        }
    }

    Ok(())
}

/// Write the flat array, then the matrix read back position by position.
fn show<W: Write, L: Layout>(
    out: &mut W,
    name: &str,
    packed: &Packed<i64, L>,
    reverse: fn(&[i64], usize, usize, usize) -> i64,
) -> io::Result<()> {
    let (n, _) = packed.layout().shape();

    writeln!(out, "*** {} Mapping ***", name)?;
    writeln!(out, "{}", packed)?;
    writeln!(out, "Reversed {}:", name)?;
    write!(out, "{}", DenseMatrix::from_fn(n, n, |i, j| reverse(packed.data(), n, i, j)))
}
