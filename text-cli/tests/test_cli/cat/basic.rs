use crate::add_test;
use crate::common::{generate_random_data, Fixture, BINARY_DATA, SAMPLE_TEXT};
use crate::KB;

// Test copying a single file
add_test!(single_file, async {
    const FILE_NAME: &str = "sample.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_cargo("cat", &[&file_path]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, SAMPLE_TEXT);
    assert!(output.stderr.is_empty());
});

// Test concatenating multiple files in order
add_test!(multiple_files, async {
    const FILE_1: &str = "file1.bin";
    const FILE_2: &str = "file2.bin";
    const FILE_3: &str = "file3.bin";

    let data1 = generate_random_data(KB);
    let data2 = generate_random_data(2 * KB);
    let data3 = BINARY_DATA.to_vec();

    let mut fixture = Fixture::with_files(&[FILE_1, FILE_2, FILE_3], &[&data1, &data2, &data3]);

    let path_1 = fixture.path(FILE_1);
    let path_2 = fixture.path(FILE_2);
    let path_3 = fixture.path(FILE_3);

    let output = fixture.run_cargo("cat", &[&path_1, &path_2, &path_3]).await;
    assert!(output.status.success());

    let expected = data1
        .into_iter()
        .chain(data2)
        .chain(data3)
        .collect::<Vec<_>>();
    assert!(output.stdout_raw == expected);
});

// Test reading standard input when no file is given
add_test!(stdin_without_operands, async {
    let mut fixture = Fixture::empty();

    let output = fixture
        .run_cargo_with_stdin("cat", &[], SAMPLE_TEXT.as_bytes())
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, SAMPLE_TEXT);
});

// Test splicing standard input between files with `-`
add_test!(stdin_between_files, async {
    let mut fixture = Fixture::with_files(&["f", "g"], &[b"from f\n", b"from g\n"]);

    let path_f = fixture.path("f");
    let path_g = fixture.path("g");

    let output = fixture
        .run_cargo_with_stdin("cat", &[&path_f, "-", &path_g], b"from stdin\n")
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "from f\nfrom stdin\nfrom g\n");
});

// Test numbering lines
add_test!(number_lines, async {
    let mut fixture = Fixture::with_file("lines.txt", b"alpha\nbeta\n\ngamma\n");
    let file_path = fixture.path("lines.txt");

    let output = fixture.run_cargo("cat", &["-n", &file_path]).await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        "     1  alpha\n     2  beta\n     3  \n     4  gamma\n"
    );
});
