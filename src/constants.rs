/// The language whose stopword list is used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "english";

/// The ASCII punctuation characters removed during normalization.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

// Column names used by the source dataset
pub const HEADLINE_COLUMN: &str = "headline";
pub const PUBLISHER_COLUMN: &str = "publisher";
pub const STOCK_COLUMN: &str = "stock";
pub const DATE_COLUMN: &str = "date";

// Derived column names
pub const TOKENS_COLUMN: &str = "tokens";
pub const TOKENS_JOINED_COLUMN: &str = "tokens_joined";
pub const PUBLISHER_DOMAIN_COLUMN: &str = "publisher_domain";
pub const HEADLINE_WORD_COUNT_COLUMN: &str = "headline_len_words";

/// Extracts the text following the last `@` of an email-like publisher identifier.
pub const PUBLISHER_DOMAIN_PATTERN: &str = r"@([\w\.-]+)\n?$";

/// Multiplier applied to the interquartile range when removing outliers.
pub const IQR_OUTLIER_FACTOR: f64 = 1.5;

pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];
