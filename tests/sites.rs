extern crate offtarget;

use offtarget::common::encode_dna;
use offtarget::index::ReferenceIndex;
use offtarget::pam::PAM;
use offtarget::sites::*;

fn guides(window: &[u8]) -> Vec<String> {
    let mut guides: Vec<String> = guide_variants(window, &PAM::cas9())
        .into_iter()
        .map(|code| code.decode())
        .collect();
    guides.sort();
    guides
}

#[test]
fn test_plain_guide() {
    assert_eq!(guides(b"ACGTGGTGGCAATGCACGGTAGG"), vec!["ACGTGGTGGCAATGCACGGT"]);
}

#[test]
fn test_window_must_fit_exactly() {
    assert!(guides(b"CGTGGTGGCAATGCACGGTAGG").is_empty());
    assert!(guides(b"AACGTGGTGGCAATGCACGGTAGG").is_empty());
}

#[test]
fn test_pam_required() {
    assert!(guides(b"ACGTGGTGGCAATGCACGGTAGA").is_empty());
    assert!(guides(b"ACGTGGTGGCAATGCACGGTACG").is_empty());
}

#[test]
fn test_wildcard_pam() {
    assert_eq!(guides(b"ACGTGGTGGCAATGCACGGTANG"), vec!["ACGTGGTGGCAATGCACGGT"]);
}

#[test]
fn test_wildcards_expanded() {
    let expected = vec![
        "ACGTGGTGGCAATACACGGA",
        "ACGTGGTGGCAATACACGGC",
        "ACGTGGTGGCAATACACGGG",
        "ACGTGGTGGCAATACACGGT",
        "ACGTGGTGGCAATCCACGGA",
        "ACGTGGTGGCAATCCACGGC",
        "ACGTGGTGGCAATCCACGGG",
        "ACGTGGTGGCAATCCACGGT",
        "ACGTGGTGGCAATGCACGGA",
        "ACGTGGTGGCAATGCACGGC",
        "ACGTGGTGGCAATGCACGGG",
        "ACGTGGTGGCAATGCACGGT",
        "ACGTGGTGGCAATTCACGGA",
        "ACGTGGTGGCAATTCACGGC",
        "ACGTGGTGGCAATTCACGGG",
        "ACGTGGTGGCAATTCACGGT",
    ];

    assert_eq!(guides(b"ACGTGGTGGCAATNCACGGNTGG"), expected);
}

#[test]
fn test_too_many_wildcards() {
    // Two in the guide and one in the PAM
    assert!(guides(b"ACGTGGTGGCAATNCACGGNTNG").is_empty());
    assert!(guides(b"NNNTGGTGGCAATGCACGGTAGG").is_empty());
}

#[test]
fn test_other_symbols_rejected() {
    assert!(guides(b"ACGTGGTGGCAATRCACGGTAGG").is_empty());
}

#[test]
fn test_scan_both_strands() {
    // Forward guide at position 3; CCN + reverse guide at position 31
    let sequence = b"TTACGTGGTGGCAATGCACGGTAGGTTCCATTTTTTTTTTTTTTTTTTTTA";
    let sites = scan_sequence(sequence, 0, &PAM::cas9(), true);

    let forward = Site {
        code: encode_dna(b"ACGTGGTGGCAATGCACGGT").unwrap(),
        position: Some(Position::forward(0, 3)),
    };
    let reverse = Site {
        code: encode_dna(b"AAAAAAAAAAAAAAAAAAAA").unwrap(),
        position: Some(Position::reverse(0, 31)),
    };

    assert!(sites.contains(&forward), "{:?}", sites);
    assert!(sites.contains(&reverse), "{:?}", sites);
}

#[test]
fn test_scan_without_positions() {
    let sites = scan_sequence(b"ACGTGGTGGCAATGCACGGTAGG", 0, &PAM::cas9(), false);

    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].position, None);
}

#[test]
fn test_position_token() {
    let refseqs = vec!["chr1".to_string(), "chr2".to_string()];

    assert_eq!(Position::forward(1, 17).to_token(&refseqs), "chr2:17:+");
    assert_eq!(Position::reverse(0, 5).to_token(&refseqs), "chr1:5:-");
}

#[test]
fn test_write_sites_groups_guides() {
    let refseqs = vec!["chr1".to_string()];
    let a = encode_dna(b"AAAAAAAAAAAAAAAAAAAA").unwrap();
    let c = encode_dna(b"CCCCCCCCCCCCCCCCCCCC").unwrap();
    let mut sites = vec![
        Site {
            code: c,
            position: Some(Position::forward(0, 40)),
        },
        Site {
            code: a,
            position: Some(Position::reverse(0, 7)),
        },
        Site {
            code: a,
            position: Some(Position::forward(0, 2)),
        },
    ];
    sort_sites(&mut sites);

    let mut out = Vec::new();
    let written = write_sites(&mut out, &sites, &refseqs, true).unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "AAAAAAAAAAAAAAAAAAAA\t2\tchr1:2:+\tchr1:7:-\n\
         CCCCCCCCCCCCCCCCCCCC\t1\tchr1:40:+\n"
    );
}

#[test]
fn test_written_sites_form_reference() {
    let sequence = b"GGCCATGCATGCATGCATGCATGCAGGACGTACGTACGTACGTACGTTGGTT";
    let mut sites = scan_sequence(sequence, 0, &PAM::cas9(), true);
    sort_sites(&mut sites);

    let mut out = Vec::new();
    write_sites(&mut out, &sites, &["chr1".to_string()], false).unwrap();

    let index = ReferenceIndex::build(&out[..]).unwrap();
    assert!(!index.is_empty());
    for site in &sites {
        assert!(index.codes().contains(&site.code));
    }
}
