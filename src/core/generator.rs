use crate::domain::model::{Address, Child, Parent, Person, Pet};
use crate::domain::ports::PersonGenerator;
use rand::Rng;
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Amelia", "Oliver", "Sophia", "Elijah", "Charlotte",
    "Mateo", "Isabella", "Lucas", "Mia", "Levi", "Ava", "Ezra", "Luna", "Asher", "Harper",
    "James", "Evelyn", "Leo", "Camila", "Luca",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

const COUNTRIES: &[&str] = &[
    "Norway", "Japan", "Brazil", "Canada", "Kenya", "Portugal", "Vietnam", "Iceland", "Chile",
    "Morocco", "Austria", "Thailand", "Ghana", "Uruguay", "Estonia", "Ireland",
];

const STATES: &[&str] = &[
    "Colorado", "Vermont", "Oregon", "Maine", "Arizona", "Montana", "Ohio", "Utah", "Georgia",
    "Kansas", "Nevada", "Iowa",
];

const COUNTIES: &[&str] = &[
    "Avon", "Bedfordshire", "Berkshire", "Cambridgeshire", "Cheshire", "Cornwall", "Devon",
    "Dorset", "Essex", "Kent", "Norfolk", "Somerset", "Surrey", "Wiltshire",
];

const CITIES: &[&str] = &[
    "Lakeside", "Fairview", "Riverton", "Springdale", "Brookhaven", "Cedarville", "Elmwood",
    "Greenfield", "Harborview", "Kingsport", "Maplewood", "Northfield",
];

const GENDERS: &[&str] = &["Female", "Male", "Nonbinary"];

const JOB_DESCRIPTORS: &[&str] = &[
    "Lead", "Senior", "Principal", "Global", "Regional", "Dynamic", "Chief", "Forward",
];

const JOB_AREAS: &[&str] = &[
    "Brand", "Data", "Research", "Marketing", "Security", "Operations", "Accounts", "Markets",
];

const JOB_ROLES: &[&str] = &[
    "Engineer", "Analyst", "Producer", "Coordinator", "Strategist", "Consultant", "Planner",
    "Designer",
];

const PET_NAMES: &[&str] = &[
    "Bella", "Max", "Luna", "Charlie", "Milo", "Daisy", "Rocky", "Coco", "Buddy", "Nala",
];

fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// 以固定名字池隨機產生家庭記錄；每筆都有新的 UUID
///
/// Each record has two parents, one child and one pet. Stateless aside
/// from the thread-local RNG, so it can be called from anywhere any number
/// of times.
#[derive(Debug, Clone, Default)]
pub struct RandomPersonGenerator;

impl RandomPersonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PersonGenerator for RandomPersonGenerator {
    fn generate(&self) -> Person {
        let mut rng = rand::thread_rng();

        Person {
            id: Uuid::new_v4().to_string(),
            country: pick(&mut rng, COUNTRIES).to_string(),
            last_name: pick(&mut rng, LAST_NAMES).to_string(),
            parents: vec![
                Parent {
                    first_name: pick(&mut rng, FIRST_NAMES).to_string(),
                },
                Parent {
                    first_name: pick(&mut rng, FIRST_NAMES).to_string(),
                },
            ],
            children: vec![Child {
                first_name: pick(&mut rng, FIRST_NAMES).to_string(),
                gender: pick(&mut rng, GENDERS).to_string(),
                job_title: format!(
                    "{} {} {}",
                    pick(&mut rng, JOB_DESCRIPTORS),
                    pick(&mut rng, JOB_AREAS),
                    pick(&mut rng, JOB_ROLES)
                ),
                pets: vec![Pet {
                    given_name: pick(&mut rng, PET_NAMES).to_string(),
                }],
            }],
            address: Address {
                state: pick(&mut rng, STATES).to_string(),
                county: pick(&mut rng, COUNTIES).to_string(),
                city: pick(&mut rng, CITIES).to_string(),
            },
        }
    }
}
