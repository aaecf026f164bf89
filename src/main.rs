fn main() -> color_switcher::Result<()> {
    color_switcher::run(wild::args_os())
}
