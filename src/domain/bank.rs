//! The fixed 50-item question catalog: 10 statements per dimension, each
//! carrying a reverse-scoring flag and a difficulty in [-1, 1]. Built once at
//! startup as an immutable table; the database `questions` table is a mirror
//! of this catalog, seeded by `db::seed`.

use once_cell::sync::Lazy;

use super::dimension::Dimension;

#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub dimension: Dimension,
    pub reverse_scored: bool,
    pub difficulty: f64,
}

pub struct QuestionBank {
    questions: Vec<Question>,
}

static BANK: Lazy<QuestionBank> = Lazy::new(|| QuestionBank::new(catalog()));

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The process-wide catalog.
    pub fn get() -> &'static QuestionBank {
        &BANK
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions of one dimension, in catalog order.
    pub fn in_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.dimension == dimension)
    }
}

fn q(
    id: &'static str,
    text: &'static str,
    dimension: Dimension,
    reverse_scored: bool,
    difficulty: f64,
) -> Question {
    Question {
        id,
        text,
        dimension,
        reverse_scored,
        difficulty,
    }
}

fn catalog() -> Vec<Question> {
    use Dimension::*;
    vec![
        q("o1", "أستمتع بالتفكير في الأفكار المجردة والمفاهيم النظرية.", Openness, false, -1.0),
        q("o2", "لدي خيال خصب جداً.", Openness, false, -0.5),
        q("o3", "أنا فضولي بشأن كل شيء تقريباً.", Openness, false, 0.0),
        q("o4", "أفضل الروتين على التغيير.", Openness, true, 0.5),
        q("o5", "أنا مبدع وأحب ابتكار أشياء جديدة.", Openness, false, 1.0),
        q("o6", "أجد صعوبة في فهم الأفكار المجردة.", Openness, true, -1.0),
        q("o7", "أحب تجربة الأنشطة الجديدة.", Openness, false, -0.5),
        q("o8", "لست مهتماً بالفنون.", Openness, true, 0.0),
        q("o9", "أحب حل المشكلات المعقدة.", Openness, false, 0.5),
        q("o10", "أميل إلى التصويت للمرشحين المحافظين.", Openness, true, 1.0),
        q("c1", "أنا دائماً مستعد ومنظم.", Conscientiousness, false, -1.0),
        q("c2", "أترك أشيائي فوضوياً.", Conscientiousness, true, -0.5),
        q("c3", "أهتم بالتفاصيل.", Conscientiousness, false, 0.0),
        q("c4", "أؤجل المهام المهمة.", Conscientiousness, true, 0.5),
        q("c5", "أتبع جدولاً زمنياً.", Conscientiousness, false, 1.0),
        q("c6", "أنا دقيق في عملي.", Conscientiousness, false, -1.0),
        q("c7", "أنسى أحياناً إعادة الأشياء إلى مكانها الصحيح.", Conscientiousness, true, -0.5),
        q("c8", "أحب النظام.", Conscientiousness, false, 0.0),
        q("c9", "أجد صعوبة في الالتزام بالخطط.", Conscientiousness, true, 0.5),
        q("c10", "أنا مجتهد ومثابر.", Conscientiousness, false, 1.0),
        q("e1", "أنا محور الاهتمام في الحفلات.", Extraversion, false, -1.0),
        q("e2", "لا أتحدث كثيراً.", Extraversion, true, -0.5),
        q("e3", "أشعر بالراحة حول الناس.", Extraversion, false, 0.0),
        q("e4", "أفضل البقاء في الخلفية.", Extraversion, true, 0.5),
        q("e5", "أبدأ المحادثات.", Extraversion, false, 1.0),
        q("e6", "لدي دائرة واسعة من المعارف.", Extraversion, false, -1.0),
        q("e7", "أنا هادئ حول الغرباء.", Extraversion, true, -0.5),
        q("e8", "لا أمانع أن أكون مركز الاهتمام.", Extraversion, false, 0.0),
        q("e9", "أفضل قضاء الوقت بمفردي.", Extraversion, true, 0.5),
        q("e10", "أنا مفعم بالحيوية والنشاط.", Extraversion, false, 1.0),
        q("a1", "أتعاطف مع مشاعر الآخرين.", Agreeableness, false, -1.0),
        q("a2", "لست مهتماً بمشاكل الآخرين.", Agreeableness, true, -0.5),
        q("a3", "لدي قلب حنون.", Agreeableness, false, 0.0),
        q("a4", "أهين الناس.", Agreeableness, true, 0.5),
        q("a5", "أجعل الناس يشعرون بالراحة.", Agreeableness, false, 1.0),
        q("a6", "أنا صبور مع الآخرين.", Agreeableness, false, -1.0),
        q("a7", "أنا سريع الغضب.", Agreeableness, true, -0.5),
        q("a8", "أثق بالآخرين.", Agreeableness, false, 0.0),
        q("a9", "أنا متشكك في نوايا الآخرين.", Agreeableness, true, 0.5),
        q("a10", "أنا متعاون بطبعي.", Agreeableness, false, 1.0),
        q("n1", "أشعر بالتوتر بسهولة.", Neuroticism, false, -1.0),
        q("n2", "أنا مسترخٍ في معظم الأوقات.", Neuroticism, true, -0.5),
        q("n3", "أقلق بشأن الأشياء.", Neuroticism, false, 0.0),
        q("n4", "نادراً ما أشعر بالحزن.", Neuroticism, true, 0.5),
        q("n5", "أنا متقلب المزاج.", Neuroticism, false, 1.0),
        q("n6", "أتعامل مع التوتر بشكل جيد.", Neuroticism, true, -1.0),
        q("n7", "أشعر بالقلق كثيراً.", Neuroticism, false, -0.5),
        q("n8", "أنا مستقر عاطفياً.", Neuroticism, true, 0.0),
        q("n9", "يمكن أن أكون سريع الانفعال.", Neuroticism, false, 0.5),
        q("n10", "أنا راضٍ عن نفسي.", Neuroticism, true, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dimension::DIMENSION_ORDER;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_questions_per_dimension() {
        let bank = QuestionBank::get();
        assert_eq!(bank.all().len(), 50);
        for dim in DIMENSION_ORDER {
            assert_eq!(bank.in_dimension(dim).count(), 10);
        }
    }

    #[test]
    fn ids_are_unique_and_difficulties_in_range() {
        let bank = QuestionBank::get();
        let ids: HashSet<&str> = bank.all().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), bank.all().len());
        for q in bank.all() {
            assert!((-1.0..=1.0).contains(&q.difficulty), "{} out of range", q.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let bank = QuestionBank::get();
        let q = bank.by_id("c4").expect("c4 exists");
        assert_eq!(q.dimension, Dimension::Conscientiousness);
        assert!(q.reverse_scored);
        assert!(bank.by_id("z99").is_none());
    }
}
