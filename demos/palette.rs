fn main() -> std::io::Result<()> {
    spectra::palette::write_palette(&mut std::io::stdout().lock())
}
