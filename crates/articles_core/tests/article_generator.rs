use articles_core::{
    ArticleGenerator, GenerateError, JoinArticleGenerator, Word, WordValidationError,
};

fn words(values: &[&str]) -> Vec<Word> {
    values.iter().map(|value| Word::new(*value)).collect()
}

#[test]
fn generate_joins_values_with_single_space_in_order() {
    let generator = JoinArticleGenerator::default();

    let article = generator
        .generate(&words(&["lorem", "ipsum", "dolor"]))
        .unwrap();
    assert_eq!(article.content, "lorem ipsum dolor");
}

#[test]
fn generate_on_empty_input_yields_empty_article() {
    let article = JoinArticleGenerator::default().generate(&[]).unwrap();

    assert_eq!(article.content, "");
    assert!(article.is_empty());
}

#[test]
fn generate_single_word_has_no_separator() {
    let article = JoinArticleGenerator::default()
        .generate(&words(&["solo"]))
        .unwrap();
    assert_eq!(article.content, "solo");
}

#[test]
fn generate_is_deterministic() {
    let generator = JoinArticleGenerator::default();
    let input = vec![Word::with_id(2, "b"), Word::with_id(1, "a"), Word::new("c")];

    let first = generator.generate(&input).unwrap();
    let second = generator.generate(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.content, "b a c");
}

#[test]
fn generate_rejects_empty_word_with_its_position() {
    let err = JoinArticleGenerator::default()
        .generate(&words(&["lorem", "", "dolor"]))
        .unwrap_err();

    assert_eq!(
        err,
        GenerateError::InvalidInput {
            index: 1,
            source: WordValidationError::EmptyValue,
        }
    );
}

#[test]
fn generate_keeps_whitespace_words_verbatim() {
    let article = JoinArticleGenerator::default()
        .generate(&words(&["a", " ", "b"]))
        .unwrap();
    assert_eq!(article.content, "a   b");
}

#[test]
fn boxed_generator_is_usable_as_trait_object() {
    let generator: Box<dyn ArticleGenerator> = Box::new(JoinArticleGenerator::new("-"));

    let article = generator.generate(&words(&["a", "b"])).unwrap();
    assert_eq!(article.content, "a-b");
}
