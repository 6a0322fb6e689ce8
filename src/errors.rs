error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidSymbol(sequence: String) {
            description("invalid nucleotide sequence")
            display("invalid 20-mer {:?}; expected exactly 20 of A, C, G, T", sequence)
        }

        InvalidQuery(query: String) {
            description("invalid query")
            display("invalid query {:?}; queries must be 20-mers", query)
        }

        InvalidRadius(radius: String) {
            description("invalid search radius")
            display(
                "radius must be 5_9_x, with 9 <= x <= 20, or 5_10_x, with 10 <= x <= 20, but got {:?}",
                radius
            )
        }

        IngestionError(line: usize, reason: String) {
            description("malformed reference record")
            display("malformed reference record at line {}: {}", line, reason)
        }

        CorrelationError(reason: String) {
            description("reference records inconsistent with index")
            display("could not locate matches in reference: {}", reason)
        }

        CapabilityUnavailable(name: String) {
            description("reference source cannot be re-read")
            display("locations require a re-readable reference, but {} can only be read once", name)
        }
    }
}
