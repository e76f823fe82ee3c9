fn main() {
    tinyboot::term::main()
}
