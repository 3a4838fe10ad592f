use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use elfscope_core::consts::{ftype, osabi};
use elfscope_core::header::{HEADER32_BODY_LEN, HEADER64_BODY_LEN, Header};
use elfscope_core::ident::{self, IDENT_LEN, Ident};
use elfscope_core::DecodeError;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Simple ELF header inspection CLI
#[derive(Parser)]
#[command(
    name = "elfscope",
    about = "Decode the identification block and file header of ELF binaries",
    version,
    author
)]
struct Cli {
    /// Path to ELF file
    #[arg(required = true)]
    path: std::path::PathBuf,

    /// Emit JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the 16-byte identification block
    Ident,
    /// Show the full file header
    Header,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(field: &'static str, value: impl Into<String>) -> Row {
    Row {
        field,
        value: value.into(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let buf = std::fs::read(&cli.path)
        .with_context(|| format!("reading {}", cli.path.display()))?;
    log::info!("Read {} bytes from {}", buf.len(), cli.path.display());

    if buf.len() < IDENT_LEN {
        bail!(
            "file is {} bytes, too short for the {}-byte ELF identification block",
            buf.len(),
            IDENT_LEN
        );
    }

    let ident = match Ident::decode(&buf) {
        Ok(ident) => ident,
        Err(DecodeError::InvalidMagic { found }) => {
            eprintln!(
                "{} first bytes {:02x?} do not spell 0x7F \"ELF\"",
                "not an ELF file:".red().bold(),
                found
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match cli.command {
        Command::Ident => print_ident(&ident, cli.json)?,
        Command::Header => {
            let header = decode_header(ident, &buf)?;
            print_header(&header, cli.json)?;
        }
    }

    Ok(())
}

/// Caller-side duties the core decoders leave to us: reject classes that
/// are neither 32- nor 64-bit and make sure the buffer actually holds the
/// whole header before handing over the body slice.
fn decode_header(ident: Ident, buf: &[u8]) -> Result<Header> {
    let body_len = match ident.class {
        ident::CLASS_32 => HEADER32_BODY_LEN,
        ident::CLASS_64 => HEADER64_BODY_LEN,
        other => bail!("unsupported ELF class {other:#04x} (neither 32- nor 64-bit)"),
    };
    if buf.len() < IDENT_LEN + body_len {
        bail!(
            "file is {} bytes, but a {}-bit header needs {}",
            buf.len(),
            if ident.is_64() { 64 } else { 32 },
            IDENT_LEN + body_len
        );
    }

    log::info!(
        "Declared {}-bit, {}; byte swap needed: {}",
        if ident.is_64() { 64 } else { 32 },
        endian_desc(ident.endian),
        ident.needs_swap()
    );

    Ok(Header::decode(ident, &buf[IDENT_LEN..])?)
}

fn class_desc(class: u8) -> String {
    match class {
        ident::CLASS_32 => format!("{class} (32-bit)"),
        ident::CLASS_64 => format!("{class} (64-bit)"),
        other => format!("{other:#04x} (unknown)"),
    }
}

fn endian_desc(endian: u8) -> String {
    match endian {
        ident::ENDIAN_LITTLE => format!("{endian} (little-endian)"),
        ident::ENDIAN_BIG => format!("{endian} (big-endian)"),
        other => format!("{other:#04x} (unknown)"),
    }
}

fn print_ident(ident: &Ident, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ident)?);
        return Ok(());
    }

    let rows = vec![
        row("magic", format!("{:02x?}", ident.magic)),
        row("class", class_desc(ident.class)),
        row("endianness", endian_desc(ident.endian)),
        row("version", ident.version.to_string()),
        row(
            "OS/ABI",
            format!(
                "{} ({})",
                ident.os_abi,
                osabi::name(ident.os_abi).unwrap_or("unknown")
            ),
        ),
        row("ABI version", ident.abi_version.to_string()),
        row("padding", format!("{:02x?}", ident.pad)),
    ];

    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{table}");
    Ok(())
}

fn print_header(header: &Header, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(header)?);
        return Ok(());
    }

    let (e_version, e_flags, e_ehsize, e_phentsize, e_shentsize) = match header {
        Header::Elf32(h) => (h.e_version, h.e_flags, h.e_ehsize, h.e_phentsize, h.e_shentsize),
        Header::Elf64(h) => (h.e_version, h.e_flags, h.e_ehsize, h.e_phentsize, h.e_shentsize),
    };
    let (e_phnum, e_shnum, e_shstrndx) = match header {
        Header::Elf32(h) => (h.e_phnum, h.e_shnum, h.e_shstrndx),
        Header::Elf64(h) => (h.e_phnum, h.e_shnum, h.e_shstrndx),
    };

    let rows = vec![
        row("class", if header.is_64() { "64-bit" } else { "32-bit" }),
        row("endianness", endian_desc(header.ident().endian)),
        row(
            "file type",
            format!(
                "{} ({})",
                header.file_type(),
                ftype::name(header.file_type()).unwrap_or("unknown")
            ),
        ),
        row("machine", format!("{:#x}", header.machine())),
        row("version", e_version.to_string()),
        row("entry point", format!("{:#x}", header.entry_point())),
        row(
            "program header offset",
            format!("{:#x}", header.program_header_offset()),
        ),
        row(
            "section header offset",
            format!("{:#x}", header.section_header_offset()),
        ),
        row("flags", format!("{e_flags:#x}")),
        row("header size", e_ehsize.to_string()),
        row("program header entry size", e_phentsize.to_string()),
        row("program header count", e_phnum.to_string()),
        row("section header entry size", e_shentsize.to_string()),
        row("section header count", e_shnum.to_string()),
        row("section name table index", e_shstrndx.to_string()),
    ];

    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{table}");
    Ok(())
}
