// VectorizedCorpus: normalized tokens, vocabulary and vectors for one corpus.
//
// Built once from the labels and then queried: all pairs, a single pair, or
// the nearest labels to one label. Vectors are memoized so repeated queries
// against the same corpus don't re-tokenize anything.

use tracing::{debug, info};

use super::cosine::cosine_similarity;
use super::error::SimilarityError;
use super::normalize::normalize;
use super::pairwise::SimilarityResult;
use super::vectorize::{vectorize, TermVector};
use super::vocabulary::Vocabulary;

/// A label corpus projected into its own bag-of-words vector space.
#[derive(Debug, Clone)]
pub struct VectorizedCorpus {
    tokens: Vec<Vec<String>>,
    vocabulary: Vocabulary,
    vectors: Vec<TermVector>,
}

/// A neighbouring label and its similarity to the query label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub score: f64,
}

impl VectorizedCorpus {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let tokens: Vec<Vec<String>> = labels.iter().map(|l| normalize(l.as_ref())).collect();
        let vocabulary = Vocabulary::build(&tokens);
        let vectors: Vec<TermVector> = tokens.iter().map(|t| vectorize(t, &vocabulary)).collect();

        debug!(
            labels = tokens.len(),
            vocabulary = vocabulary.len(),
            "Vectorized corpus"
        );

        Self {
            tokens,
            vocabulary,
            vectors,
        }
    }

    /// Number of labels in the corpus.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Normalized tokens of the label at `index`.
    pub fn tokens(&self, index: usize) -> Option<&[String]> {
        self.tokens.get(index).map(Vec::as_slice)
    }

    /// Term vector of the label at `index`.
    pub fn vector(&self, index: usize) -> Option<&[u32]> {
        self.vectors.get(index).map(Vec::as_slice)
    }

    /// Similarity between two labels, or `None` if either index is out of range.
    pub fn similarity(&self, i: usize, j: usize) -> Option<Result<f64, SimilarityError>> {
        let a = self.vectors.get(i)?;
        let b = self.vectors.get(j)?;
        Some(cosine_similarity(a, b))
    }

    /// Every unordered pair, ascending by `i` then `j`.
    pub fn pairs(&self) -> Result<Vec<SimilarityResult>, SimilarityError> {
        let n = self.vectors.len();
        let mut results = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in (i + 1)..n {
                let score = cosine_similarity(&self.vectors[i], &self.vectors[j])?;
                results.push(SimilarityResult { i, j, score });
            }
        }

        info!(
            labels = n,
            vocabulary = self.vocabulary.len(),
            pairs = results.len(),
            "Computed pairwise similarities"
        );

        Ok(results)
    }

    /// The `k` labels most similar to the label at `index`, best first.
    ///
    /// Ties are broken by ascending index. Returns an empty list when
    /// `index` is out of range.
    pub fn most_similar(&self, index: usize, k: usize) -> Result<Vec<Neighbor>, SimilarityError> {
        let Some(query) = self.vectors.get(index) else {
            return Ok(Vec::new());
        };

        let mut neighbors = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(other, v)| {
                cosine_similarity(query, v).map(|score| Neighbor {
                    index: other,
                    score,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        neighbors.sort_by(|a, b| b.score.total_cmp(&a.score));
        neighbors.truncate(k);
        Ok(neighbors)
    }
}
