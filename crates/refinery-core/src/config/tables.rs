//! Default declarative rule tables.
//!
//! Everything here is data: the scorer and recategorizer compile these sources
//! at construction time, and callers may replace any table through config.

/// Curated technical vocabulary (English and Korean).
pub const TECHNICAL_TERMS: &[&str] = &[
    "API",
    "REST",
    "GraphQL",
    "HTTP",
    "JSON",
    "SQL",
    "NoSQL",
    "Docker",
    "Kubernetes",
    "Rust",
    "Python",
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "machine learning",
    "deep learning",
    "neural network",
    "artificial intelligence",
    "algorithm",
    "database",
    "microservice",
    "cloud computing",
    "blockchain",
    "DevOps",
    "CI/CD",
    "LLM",
    "transformer",
    "embedding",
    "인공지능",
    "머신러닝",
    "딥러닝",
    "데이터베이스",
    "알고리즘",
    "클라우드",
    "블록체인",
    "프로그래밍",
    "자연어처리",
];

/// Technical suffix, acronym, and compound shapes.
pub const TECHNICAL_PATTERNS: &[&str] = &[
    r"(?i)(?:ware|tech|system|service|server|engine|framework|platform|protocol|algorithm|network|database|pipeline|compiler|runtime|sdk|api)s?$",
    r"^[A-Z]{2,6}[0-9]*s?$",
    r"^[A-Za-z][A-Za-z0-9]*[-./][A-Za-z0-9]+",
    r"(?:시스템|엔진|모델|서버|플랫폼|알고리즘|프레임워크|네트워크|데이터)$",
];

/// Noise shapes. Each match adds 0.5 to the noise score.
pub const NOISE_PATTERNS: &[&str] = &[
    // Generic pronouns and particles.
    r"(?i)^(?:it|this|that|these|those|they|them|we|us|you|he|she|i|me|something|anything|thing|things|stuff)$",
    r"^(?:이것|그것|저것|이거|그거|저거|우리|저희|여기|거기|저기|이런|그런|저런|무엇|뭔가|것|수|등|때)$",
    // Honorific and polite verb endings.
    r"(?:습니다|합니다|입니다|세요|해요|에요|예요|어요|아요|십시오|드립니다)$",
    // A single character, or symbol-heavy strings.
    r"^(?:.|.*[^\p{L}\p{N}\s]{3,}.*)$",
    // Pure numbers.
    r"^\d+(?:[.,]\d+)*$",
];

/// Names pinned to a zero score regardless of any other signal.
///
/// Covers every word of the pronoun noise patterns plus common particles and
/// prepositions, which the weighted formula alone cannot push below 0.2.
pub const STOPWORDS: &[&str] = &[
    // Pronouns.
    "it", "this", "that", "these", "those", "they", "them", "we", "us", "you", "he", "she", "i",
    "me", "something", "anything", "thing", "things", "stuff",
    // English particles, prepositions, articles, conjunctions.
    "a", "an", "the", "of", "in", "on", "at", "to", "as", "by", "for", "from", "with", "into",
    "onto", "about", "and", "or", "but", "nor", "so", "if", "is", "be", "up", "off",
    // Korean pronouns and bound nouns.
    "이것", "그것", "저것", "이거", "그거", "저거", "우리", "저희", "여기", "거기", "저기",
    "이런", "그런", "저런", "무엇", "뭔가", "것", "수", "등", "때",
    // Korean particles.
    "은", "는", "이", "가", "을", "를", "에", "의", "도", "만", "와", "과", "로", "에서",
    "으로", "까지", "부터", "에게", "한테", "처럼", "보다", "만큼", "이나", "이랑", "하고",
    "에는", "에도", "으로는",
];

/// Short names written purely in this script carry little information.
pub const LOW_INFORMATION_SCRIPT: &str = r"^\p{Hangul}+$";

/// Camel-case and acronym shapes.
pub const CAMEL_CASE_PATTERNS: &[&str] = &[
    r"^[a-z]+(?:[A-Z][a-z0-9]+)+$",
    r"^[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]+)+$",
    r"^[A-Z]{2,}[0-9]*s?$",
];

/// Ordered category rule-sets: the first match wins.
pub const CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            r"(?i)(?:\bai\b|artificial intelligence|machine learning|deep learning|neural|\bllm\b|\bgpt|transformer|embedding|\bnlp\b|computer vision)",
            r"(?:인공지능|머신러닝|딥러닝|신경망|자연어)",
        ],
    ),
    (
        "programming",
        &[
            r"(?i)(?:programming|\bcode\b|coding|python|javascript|typescript|\brust\b|\bjava\b|golang|react|django|flask|framework|library|\bapi|\bsdk\b|compiler)",
            r"(?:프로그래밍|코딩|개발|프레임워크|라이브러리)",
        ],
    ),
    (
        "architecture",
        &[
            r"(?i)(?:system|architecture|infrastructure|server|cloud|docker|kubernetes|microservice|network|devops|deploy)",
            r"(?:시스템|아키텍처|인프라|서버|클라우드|네트워크)",
        ],
    ),
    (
        "data",
        &[
            r"(?i)(?:data|\bsql\b|analytics|analysis|statistics|visuali[sz]ation|\betl\b|warehouse)",
            r"(?:데이터|분석|통계)",
        ],
    ),
    (
        "methodology",
        &[
            r"(?i)(?:methodology|agile|scrum|kanban|design pattern|principle|paradigm|process)",
            r"(?:방법론|애자일|스크럼|원칙|패턴)",
        ],
    ),
    (
        "business",
        &[
            r"(?i)(?:business|project|product|management|strategy|market|customer|revenue|roadmap)",
            r"(?:비즈니스|프로젝트|제품|관리|전략|마케팅|고객)",
        ],
    ),
];
