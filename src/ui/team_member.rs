use leptos::prelude::*;

use crate::core::content::TeamMember;

/// Card showing a team member's headshot, name, role and bio
#[component]
pub fn TeamMemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="team-member">
            <div class="member-image-wrapper">
                <img src=member.image alt=member.name class="member-image" />
                <div class="member-overlay"></div>
            </div>
            <h3 class="member-name">{member.name}</h3>
            <p class="member-role">{member.role}</p>
            <p class="member-bio">{member.bio}</p>
        </div>
    }
}
